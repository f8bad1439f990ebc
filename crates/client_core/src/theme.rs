use std::collections::BTreeSet;

pub const MOON_ICON: &str = "bi-moon-fill";
pub const SUN_ICON: &str = "bi-sun-fill";

const PAIRED_CLASSES: [&str; 4] = ["bg-dark", "text-light", "bg-light", "text-dark"];
const LIGHT_CLASSES: [&str; 2] = ["bg-light", "text-dark"];

/// Presentation classes on the document root plus the toggle icon.
///
/// Every toggle flips all four paired classes, so toggling twice restores the
/// original set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    root_classes: BTreeSet<&'static str>,
    icon: &'static str,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            root_classes: LIGHT_CLASSES.into_iter().collect(),
            icon: MOON_ICON,
        }
    }
}

impl ThemeState {
    pub fn toggle(&mut self) {
        for class in PAIRED_CLASSES {
            if !self.root_classes.remove(class) {
                self.root_classes.insert(class);
            }
        }
        self.icon = if self.icon == MOON_ICON {
            SUN_ICON
        } else {
            MOON_ICON
        };
    }

    pub fn is_dark(&self) -> bool {
        self.root_classes.contains("bg-dark")
    }

    pub fn root_classes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.root_classes.iter().copied()
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }
}
