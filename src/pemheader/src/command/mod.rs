mod config_diff;
mod config_show;
mod convert;
mod run;

pub use config_diff::config_diff;
pub use config_show::config_show;
pub use convert::convert;
pub use run::run;
