//! Category display formatting

use super::{Align, TextTable};
use crate::models::Category;

pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut table = TextTable::new(&[("ID", Align::Right), ("Name", Align::Left)]);
    for category in categories {
        table.push_row(vec![category.id.to_string(), category.name.clone()]);
    }
    table.render()
}
