// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the dashboard.
//!
//! Embeds all user-facing strings as compile-time static tables. Lookup is
//! a linear scan over ~80 keys, which only runs when a view is rendered.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the French entry to `FR` (the key-set test fails otherwise)

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Languages the dashboard ships dictionaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    /// Parse a language code. Case-sensitive; only the codes with a
    /// dictionary are accepted.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Fr]
    }

    /// The language a toggle switches to.
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }

    /// Name of the language written in itself, for the switcher label.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Fr => "Français",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Resolve a language code, failing closed to the default language.
pub fn resolve_language(code: &str) -> Lang {
    match Lang::from_code(code) {
        Some(lang) => lang,
        None => {
            warn!(code, fallback = %Lang::default(), "unsupported language code");
            Lang::default()
        }
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up `key` in the dictionary for `lang`.
///
/// Returns the key itself when the dictionary has no entry for it. Never
/// panics and never returns an empty string for a non-empty key.
///
/// # Examples
///
/// ```
/// use llm_edu_dashboard::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "reports"), "Reports");
/// assert_eq!(t(Lang::Fr, "reports"), "Rapports");
/// assert_eq!(t(Lang::Fr, "no_such_key"), "no_such_key");
/// ```
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup(catalog_for(lang), key).unwrap_or(key)
}

/// Resolve a label by language code. Unsupported codes use the default
/// language's dictionary.
pub fn localized_label<'a>(key: &'a str, language: &str) -> &'a str {
    let lang = Lang::from_code(language).unwrap_or_default();
    t(lang, key)
}

/// Every key defined for `lang`, in table order.
pub fn keys(lang: Lang) -> impl Iterator<Item = &'static str> {
    catalog_for(lang).iter().map(|&(k, _)| k)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Fr => FR,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Chrome
    ("title", "LLM Impact Dashboard"),
    ("subtitle", "How large language models are shaping student outcomes"),
    ("analyticsPlatform", "Analytics Platform"),
    ("lastUpdated", "Last updated"),
    ("dataSource", "Data source"),
    ("academicRegistry", "Academic Registry"),
    ("footer", "Educational analytics for informed decisions"),
    ("portfolio", "Portfolio"),
    ("openPanel", "Open navigation"),
    ("closePanel", "Close navigation"),
    ("loading", "Loading…"),
    ("error", "Something went wrong"),
    // Sections
    ("overview", "Overview"),
    ("analytics", "Analytics"),
    ("reports", "Reports"),
    ("settings", "Settings"),
    // Stat cards
    ("totalStudents", "Total Students"),
    ("vsLastSemester", "vs last semester"),
    ("avgImprovement", "Avg. GPA Improvement"),
    ("gpaPoints", "GPA points"),
    ("llmAdoption", "LLM Adoption"),
    ("activeUsers", "active users"),
    ("satisfactionRate", "Satisfaction Rate"),
    ("userRating", "user rating"),
    // Usage chart
    ("llmUsageTitle", "LLM Usage by Purpose"),
    ("facultyFilter", "Filter by faculty"),
    ("allFaculties", "All Faculties"),
    ("engineering", "Engineering"),
    ("business", "Business"),
    ("arts", "Arts"),
    ("science", "Science"),
    ("medicine", "Medicine"),
    ("law", "Law"),
    ("percentage", "Percentage"),
    ("students", "students"),
    ("coding", "Coding"),
    ("writing", "Writing"),
    ("research", "Research"),
    ("studying", "Studying"),
    ("brainstorming", "Brainstorming"),
    ("translation", "Translation"),
    // GPA chart
    ("gpaTitle", "GPA Trends by Institution"),
    ("gpa", "GPA"),
    ("year", "Year"),
    ("yearBound", "Up to year"),
    ("university_a", "University A"),
    ("university_b", "University B"),
    ("university_c", "University C"),
    // Demographics
    ("demographicsTitle", "Student Demographics"),
    ("undergraduate", "Undergraduate"),
    ("graduate", "Graduate"),
    ("doctoral", "Doctoral"),
    ("facultyStaff", "Faculty & Staff"),
    // Performance
    ("performanceTitle", "Performance Metrics"),
    ("improvement", "improvement"),
    // Analytics
    ("advancedAnalytics", "Advanced Analytics"),
    ("llmUsers", "LLM Users"),
    ("nonLlmUsers", "Non-LLM Users"),
    // Reports
    ("dataTableTitle", "Detailed Usage Data"),
    ("purpose", "Purpose"),
    ("usagePercent", "Usage %"),
    ("trend", "Trend"),
    // Settings
    ("dashboardSettings", "Dashboard Settings"),
    ("language", "Language"),
    ("chooseLanguage", "Choose your preferred language"),
    ("switchTo", "Switch to"),
    ("keyboardShortcuts", "Keyboard Shortcuts"),
    ("toggleLanguage", "Toggle Language"),
    ("closePanelShortcut", "Close navigation"),
    // Notifications
    ("dataUpdated", "Data updated successfully"),
    ("filterApplied", "Filter applied"),
    ("noData", "No data for this selection"),
];

// ─── French ─────────────────────────────────────────────────────────

const FR: &[(&str, &str)] = &[
    ("title", "Tableau de bord de l'impact des LLM"),
    ("subtitle", "Comment les grands modèles de langage transforment la réussite étudiante"),
    ("analyticsPlatform", "Plateforme d'analyse"),
    ("lastUpdated", "Dernière mise à jour"),
    ("dataSource", "Source des données"),
    ("academicRegistry", "Registre académique"),
    ("footer", "Analyses éducatives pour des décisions éclairées"),
    ("portfolio", "Portfolio"),
    ("openPanel", "Ouvrir la navigation"),
    ("closePanel", "Fermer la navigation"),
    ("loading", "Chargement…"),
    ("error", "Une erreur est survenue"),
    ("overview", "Vue d'ensemble"),
    ("analytics", "Analyses"),
    ("reports", "Rapports"),
    ("settings", "Paramètres"),
    ("totalStudents", "Total des étudiants"),
    ("vsLastSemester", "par rapport au dernier semestre"),
    ("avgImprovement", "Amélioration moyenne de la moyenne"),
    ("gpaPoints", "points de moyenne"),
    ("llmAdoption", "Adoption des LLM"),
    ("activeUsers", "utilisateurs actifs"),
    ("satisfactionRate", "Taux de satisfaction"),
    ("userRating", "note des utilisateurs"),
    ("llmUsageTitle", "Utilisation des LLM par objectif"),
    ("facultyFilter", "Filtrer par faculté"),
    ("allFaculties", "Toutes les facultés"),
    ("engineering", "Ingénierie"),
    ("business", "Commerce"),
    ("arts", "Arts"),
    ("science", "Sciences"),
    ("medicine", "Médecine"),
    ("law", "Droit"),
    ("percentage", "Pourcentage"),
    ("students", "étudiants"),
    ("coding", "Programmation"),
    ("writing", "Rédaction"),
    ("research", "Recherche"),
    ("studying", "Révisions"),
    ("brainstorming", "Remue-méninges"),
    ("translation", "Traduction"),
    ("gpaTitle", "Évolution de la moyenne par établissement"),
    ("gpa", "Moyenne"),
    ("year", "Année"),
    ("yearBound", "Jusqu'à l'année"),
    ("university_a", "Université A"),
    ("university_b", "Université B"),
    ("university_c", "Université C"),
    ("demographicsTitle", "Démographie étudiante"),
    ("undergraduate", "Premier cycle"),
    ("graduate", "Cycles supérieurs"),
    ("doctoral", "Doctorat"),
    ("facultyStaff", "Personnel enseignant"),
    ("performanceTitle", "Indicateurs de performance"),
    ("improvement", "amélioration"),
    ("advancedAnalytics", "Analyses avancées"),
    ("llmUsers", "Utilisateurs de LLM"),
    ("nonLlmUsers", "Non-utilisateurs de LLM"),
    ("dataTableTitle", "Données d'utilisation détaillées"),
    ("purpose", "Objectif"),
    ("usagePercent", "Utilisation %"),
    ("trend", "Tendance"),
    ("dashboardSettings", "Paramètres du tableau de bord"),
    ("language", "Langue"),
    ("chooseLanguage", "Choisissez votre langue préférée"),
    ("switchTo", "Passer en"),
    ("keyboardShortcuts", "Raccourcis clavier"),
    ("toggleLanguage", "Changer de langue"),
    ("closePanelShortcut", "Fermer la navigation"),
    ("dataUpdated", "Données mises à jour avec succès"),
    ("filterApplied", "Filtre appliqué"),
    ("noData", "Aucune donnée pour cette sélection"),
];
