pub mod dependencies;
pub mod mod_files;
pub mod mod_versions;
pub mod mods;
