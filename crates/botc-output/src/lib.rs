//! JSON artifacts built from the translation sheets.

pub mod error;
pub mod scripts;

pub use error::{OutputError, Result};
pub use scripts::{
    KNOWN_OFFICIAL_IDS, ScriptEntry, build_script_entry, generate_scripts, load_existing_scripts,
    write_scripts_json,
};
