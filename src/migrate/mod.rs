//! Daily and monthly migrations over the year/month notes layout

mod migrator;

pub use migrator::{
    MigrationError, MigrationKind, MigrationOptions, MigrationReport, Migrator,
};
