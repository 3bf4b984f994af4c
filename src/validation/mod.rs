pub mod birth_date;
pub mod checksum;
pub mod citizenship;
pub mod format;
pub mod numeric;

pub use birth_date::BirthDateValidator;
pub use checksum::ChecksumValidator;
pub use citizenship::CitizenshipValidator;
pub use format::FormatValidator;
pub use numeric::NumericValidator;
