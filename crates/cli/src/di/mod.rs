mod run;

pub use run::RunServices;
