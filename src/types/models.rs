pub mod dependency;
pub mod download;
pub mod manifest;
pub mod mod_entity;
pub mod mod_file;
pub mod mod_version;
