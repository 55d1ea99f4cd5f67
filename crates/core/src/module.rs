//! Content modules
//!
//! The five fixed sections of the portfolio. Focus is modelled as
//! `Option<Module>`, so an unknown identifier can never become the focus:
//! every string goes through [`Module::parse`] first.

use std::fmt;

/// One of the five content sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Module {
    /// All modules in display (and hotkey) order
    pub const ALL: [Module; 5] = [
        Module::About,
        Module::Projects,
        Module::Skills,
        Module::Experience,
        Module::Contact,
    ];

    /// Parse a module identifier (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Option<Module> {
        match s.trim().to_ascii_lowercase().as_str() {
            "about" => Some(Module::About),
            "projects" => Some(Module::Projects),
            "skills" => Some(Module::Skills),
            "experience" => Some(Module::Experience),
            "contact" => Some(Module::Contact),
            _ => None,
        }
    }

    /// Lowercase identifier, as typed in the console and stored in the snapshot
    pub fn id(self) -> &'static str {
        match self {
            Module::About => "about",
            Module::Projects => "projects",
            Module::Skills => "skills",
            Module::Experience => "experience",
            Module::Contact => "contact",
        }
    }

    /// Title shown in the module list
    pub fn title(self) -> &'static str {
        match self {
            Module::About => "About Module",
            Module::Projects => "Projects Module",
            Module::Skills => "Skills Module",
            Module::Experience => "Experience Module",
            Module::Contact => "Contact Module",
        }
    }

    /// File-like heading of the module view
    pub fn heading(self) -> &'static str {
        match self {
            Module::About => "ABOUT.md",
            Module::Projects => "PROJECTS/",
            Module::Skills => "SKILLS.json",
            Module::Experience => "EXPERIENCE.log",
            Module::Contact => "CONTACT.ini",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Module::About => "Identity, mission & profile snapshot",
            Module::Projects => "Highlighted builds & experiments",
            Module::Skills => "Tech stack & capabilities",
            Module::Experience => "Timeline of work & impact",
            Module::Contact => "Signal channels & links",
        }
    }

    /// Function-key number (1-5) that opens this module
    pub fn hotkey(self) -> u8 {
        match self {
            Module::About => 1,
            Module::Projects => 2,
            Module::Skills => 3,
            Module::Experience => 4,
            Module::Contact => 5,
        }
    }

    /// Module bound to function key `n`, if any
    pub fn from_hotkey(n: u8) -> Option<Module> {
        Module::ALL.into_iter().find(|m| m.hotkey() == n)
    }

    /// Heavy modules print staged loading lines when opened from the module list
    pub fn is_heavy(self) -> bool {
        matches!(self, Module::Projects | Module::Experience)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for module in Module::ALL {
            assert_eq!(Module::parse(module.id()), Some(module));
        }
        assert_eq!(Module::parse("  SKILLS "), Some(Module::Skills));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Module::parse("root"), None);
        assert_eq!(Module::parse(""), None);
        assert_eq!(Module::parse("project"), None);
    }

    #[test]
    fn test_hotkeys_round_trip() {
        for module in Module::ALL {
            assert_eq!(Module::from_hotkey(module.hotkey()), Some(module));
        }
        assert_eq!(Module::from_hotkey(6), None);
        assert_eq!(Module::from_hotkey(0), None);
    }

    #[test]
    fn test_heavy_modules() {
        assert!(Module::Projects.is_heavy());
        assert!(Module::Experience.is_heavy());
        assert!(!Module::About.is_heavy());
    }
}
