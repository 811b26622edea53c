mod locale_tag;
mod table;

pub use locale_tag::LocaleTag;
pub use table::LocalizationTable;
