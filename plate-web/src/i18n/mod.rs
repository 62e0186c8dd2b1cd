mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, bundle};
pub use locales::{LOCALE_META, Lang, LocaleMeta, locales};
pub use render::{t, tr};
