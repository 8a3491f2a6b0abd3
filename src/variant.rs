use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Classic,
    Tabbed,
    Anchored,
}

/// Tailwind class sets for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub page: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub link: &'static str,
    pub panel: &'static str,
    pub input: &'static str,
    pub button: &'static str,
}

const LIGHT: Theme = Theme {
    page: "max-w-3xl mx-auto px-4 py-12 bg-white text-gray-900",
    heading: "text-2xl font-bold mb-4 border-b-2 border-gray-300 pb-2",
    muted: "text-gray-600",
    link: "text-blue-600 hover:underline",
    panel: "mb-10 p-4 bg-gray-50 border-l-4 border-gray-400",
    input: "w-full px-3 py-2 rounded-md border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500",
    button: "px-4 py-2 rounded-md bg-blue-600 text-white hover:bg-blue-700 transition-colors duration-200",
};

const DARK: Theme = Theme {
    page: "max-w-4xl mx-auto px-4 py-8 font-mono bg-background text-foreground",
    heading: "text-xl font-bold my-6 text-cyan",
    muted: "text-muted",
    link: "text-blue hover:text-brightBlue",
    panel: "bg-brightBlack/30 p-4 rounded-md border-l-4 border-purple mb-4",
    input: "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground placeholder-muted",
    button: "px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 transition-all duration-200",
};

const SLATE: Theme = Theme {
    page: "max-w-5xl mx-auto px-6 pb-16 bg-slate-50 text-slate-900",
    heading: "text-3xl font-semibold mb-6 text-slate-800",
    muted: "text-slate-500",
    link: "text-indigo-600 hover:text-indigo-800",
    panel: "p-6 rounded-xl bg-white shadow-sm border border-slate-200",
    input: "w-full px-4 py-2 rounded-lg border border-slate-300 focus:outline-none focus:ring-2 focus:ring-indigo-500",
    button: "px-5 py-2 rounded-lg bg-indigo-600 text-white hover:bg-indigo-700 transition-colors duration-200",
};

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::Tabbed, Variant::Anchored];

    pub fn content_file(&self) -> &'static str {
        match self {
            Self::Classic => "classic.json",
            Self::Tabbed => "tabbed.json",
            Self::Anchored => "anchored.json",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Classic => "/",
            Self::Tabbed => "/tabs",
            Self::Anchored => "/sections",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Tabbed => "Tabbed",
            Self::Anchored => "Sections",
        }
    }

    pub fn theme(&self) -> &'static Theme {
        match self {
            Self::Classic => &LIGHT,
            Self::Tabbed => &DARK,
            Self::Anchored => &SLATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_and_files_are_distinct() {
        let mut paths = Variant::ALL.iter().map(|v| v.path()).collect::<Vec<_>>();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 3);

        let mut files = Variant::ALL
            .iter()
            .map(|v| v.content_file())
            .collect::<Vec<_>>();
        files.sort();
        files.dedup();
        assert_eq!(files.len(), 3);
    }
}
