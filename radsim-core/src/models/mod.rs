pub mod genotype;
pub mod site;
pub mod variant;

// re-export for cleaner imports
pub use self::genotype::Genotype;
pub use self::site::SequencedSite;
pub use self::variant::VariantRecord;
