pub mod amount;
pub mod asset_select;
pub mod form;
pub mod text;

pub use asset_select::AssetSelect;
