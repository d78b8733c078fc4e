//! Rendering of member listings into description text.

use crate::DescriptionOptions;
use enumeration_core::MemberListing;

/// One `value<separator>displayName` line per member, in value order.
pub fn render_member_lines(listing: &MemberListing, options: &DescriptionOptions) -> String {
    listing
        .iter()
        .map(|(value, display_name)| format!("{value}{}{display_name}", options.item_separator))
        .collect::<Vec<_>>()
        .join(&options.newline)
}

/// Append the member block to an existing description.
///
/// Existing text is followed by `blank_lines` empty lines before the block.
/// Without existing text the block stands alone. An empty listing leaves
/// the description unchanged.
pub fn append_member_description(
    existing: Option<&str>,
    listing: &MemberListing,
    options: &DescriptionOptions,
) -> String {
    let mut description = existing.unwrap_or_default().to_owned();
    if listing.is_empty() {
        return description;
    }
    if !description.is_empty() {
        for _ in 0..=options.blank_lines {
            description.push_str(&options.newline);
        }
    }
    description.push_str(&render_member_lines(listing, options));
    description
}
