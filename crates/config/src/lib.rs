//! Environment variable reconciliation for envforge.
//!
//! This crate resolves a declarative list of expected environment variables
//! against the process environment and a local `.env` file, regenerates
//! `.env` and `.env.example` when their content changes, and provides typed
//! getters for environment values.

pub mod accessors;
pub mod constants;
pub mod descriptor;
pub mod dotenv;
pub mod duration;
mod error;
pub mod identity;
pub mod regenerate;
pub mod render;
pub mod resolve;
mod setup;
pub mod size;
pub mod store;

pub use accessors::{
    TypedEnv, get_bool, get_duration, get_int, get_int64, get_list_string, get_size, get_string,
    set,
};
pub use descriptor::{ConfigDescriptor, parse_descriptors};
pub use error::{DotenvError, EnvWriteError, SetupError, SetupFailure};
pub use identity::{OperatorIdentity, StaticIdentity, SystemIdentity};
pub use regenerate::{Header, Regeneration};
pub use resolve::{Resolution, ResolvedEntry};
pub use setup::{EnvSetup, SETUP_FAILURE_EXIT_CODE, SetupReport, setup_config, try_setup_config};
pub use store::{EnvStore, MemoryEnv, ProcessEnv};
