//! Note name matching: exact lookup and incremental search.

/// Label shown above the note list when no search text is entered.
pub const ALL_NOTES_LABEL: &str = "All Existing Notes:";

/// Finds the stored name matching `entered` case-insensitively.
///
/// Leading and trailing whitespace in `entered` is ignored. Returns the
/// first stored name (in `names` order) whose lowercase form equals the
/// lowercase form of the trimmed input.
///
/// # Examples
///
/// ```
/// use notebag::domain::find_existing;
///
/// let names = ["Foo", "Bar"];
/// assert_eq!(find_existing(names, "foo"), Some("Foo"));
/// assert_eq!(find_existing(names, " BAR "), Some("Bar"));
/// assert_eq!(find_existing(names, "baz"), None);
/// ```
pub fn find_existing<'a, I>(names: I, entered: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let wanted = entered.trim().to_lowercase();
    names.into_iter().find(|name| name.to_lowercase() == wanted)
}

/// Filters names by case-insensitive substring and sorts them alphabetically.
///
/// An empty `search` keeps every name. Sorting compares lowercased names;
/// names with equal lowercase forms keep their input order.
///
/// # Examples
///
/// ```
/// use notebag::domain::filter_and_sort;
///
/// let names = ["Banana", "apple", "Cherry"];
/// assert_eq!(filter_and_sort(names, ""), vec!["apple", "Banana", "Cherry"]);
/// assert_eq!(filter_and_sort(names, "an"), vec!["Banana"]);
/// ```
pub fn filter_and_sort<'a, I>(names: I, search: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = search.to_lowercase();

    let mut matches: Vec<&str> = names
        .into_iter()
        .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
        .collect();

    matches.sort_by_cached_key(|name| name.to_lowercase());
    matches
}

/// Returns the heading for the note list given the current search text.
pub fn list_label(search: &str) -> String {
    if search.is_empty() {
        ALL_NOTES_LABEL.to_string()
    } else {
        format!("All Note Names Containing '{}':", search)
    }
}
