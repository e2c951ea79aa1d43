//! Typed accessors over the `[Icon Theme]` section.
//!
//! The field table below is expanded once at compile time into a getter and
//! a setter per key. Flags only read as true for a case-insensitive `"true"`.
//! Only the merged index writes fields, so some setters have no caller
//! outside tests.

use super::ThemeDescriptor;

macro_rules! theme_fields {
    (
        strings { $($sget:ident, $sset:ident => $skey:literal;)* }
        lists { $($lget:ident, $lset:ident => $lkey:literal;)* }
        flags { $($bget:ident, $bset:ident => $bkey:literal;)* }
    ) => {
        impl ThemeDescriptor {
            $(
                #[doc = concat!("The `", $skey, "` field, if present.")]
                pub fn $sget(&self) -> Option<&str> {
                    self.icon_theme_value($skey)
                }

                #[doc = concat!("Sets the `", $skey, "` field.")]
                #[allow(dead_code)]
                pub fn $sset(&mut self, value: impl Into<String>) {
                    self.set_icon_theme_value($skey, value.into());
                }
            )*

            $(
                #[doc = concat!("The `", $lkey, "` list; empty when absent.")]
                pub fn $lget(&self) -> Vec<String> {
                    split_list(self.icon_theme_value($lkey))
                }

                #[doc = concat!("Replaces the `", $lkey, "` list.")]
                #[allow(dead_code)]
                pub fn $lset<S: AsRef<str>>(&mut self, values: &[S]) {
                    self.set_icon_theme_value($lkey, join_list(values));
                }
            )*

            $(
                #[doc = concat!("The `", $bkey, "` flag; false unless set to `true`.")]
                pub fn $bget(&self) -> bool {
                    self.icon_theme_value($bkey)
                        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
                }

                #[doc = concat!("Stores the `", $bkey, "` flag as `true`/`false`.")]
                #[allow(dead_code)]
                pub fn $bset(&mut self, value: bool) {
                    let text = if value { "true" } else { "false" };
                    self.set_icon_theme_value($bkey, text.to_string());
                }
            )*
        }
    };
}

theme_fields! {
    strings {
        name, set_name => "Name";
        comment, set_comment => "Comment";
        example, set_example => "Example";
    }
    lists {
        directories, set_directories => "Directories";
        scaled_directories, set_scaled_directories => "ScaledDirectories";
        inherits, set_inherits => "Inherits";
    }
    flags {
        hidden, set_hidden => "Hidden";
    }
}

/// Splits a comma list. Trailing empty items are dropped, so an empty
/// string is an empty list.
fn split_list(value: Option<&str>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    let mut items: Vec<String> = value.split(',').map(str::to_string).collect();
    while items.last().is_some_and(String::is_empty) {
        items.pop();
    }
    items
}

fn join_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
