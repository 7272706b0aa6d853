//! Sort and filter sidebar.

pub mod catalog;
mod component;
mod model;

pub use catalog::FilterSpec;
pub use component::{
    SidebarComponent, DIETS_INFO_NAME, INGREDIENTS_INFO_NAME, NUTRITION_INFO_NAME,
    SORT_INFO_NAME, TIME_INFO_NAME,
};
pub use model::{FilterInfo, FilterOption, SidebarInfo};
