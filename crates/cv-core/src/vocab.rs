//! Static vocabulary tables used by the heuristic pipeline.
//!
//! All tables are immutable configuration data: loaded once, never mutated,
//! safe to share across concurrent parses without locking.

/// Extraction-artifact vocabulary. A line containing two or more of these
/// (and no email address) is font/engine debris, not CV content.
pub(crate) const NOISE_TERMS: &[&str] = &[
    "font",
    "fontfile",
    "glyph",
    "truetype",
    "opentype",
    "widths",
    "unicode",
    "cmap",
    "charset",
    "encoding",
    "subtype",
    "basefont",
    "descriptor",
    "xref",
    "endobj",
    "flatedecode",
    "mediabox",
    "cropbox",
    "acroform",
    "colorspace",
    "procset",
    "xobject",
    "helvetica",
    "arialmt",
    "calibri",
    "liberation",
    "nimbus",
    "dejavu",
    "renderer",
    "rasterizer",
];

/// Rendering-engine and library names that show up as isolated tokens in
/// badly extracted documents.
pub(crate) const ENGINE_NAMES: &[&str] = &[
    "skia",
    "pdfium",
    "harfbuzz",
    "freetype",
    "ghostscript",
    "webkit",
    "gecko",
    "chromium",
    "quartz",
    "cairo",
    "poppler",
    "mshtml",
];

/// Characters counted as "readable" besides alphanumerics when scoring a
/// line's readable-character ratio.
pub(crate) const READABLE_PUNCT: &[char] = &[
    ' ', '.', ',', ';', ':', '!', '?', '\'', '"', '(', ')', '&', '@', '+', '/', '#', '%', '|', '-',
    '_', '*', '\u{2022}',
];

/// Section header aliases, French and English. Matching is done on
/// diacritic-folded, lowercased text, so entries here are unaccented.
pub(crate) const SUMMARY_ALIASES: &[&str] = &[
    "summary",
    "profile",
    "about",
    "about me",
    "objective",
    "profil",
    "a propos",
    "a propos de moi",
    "objectif",
    "presentation",
    "resume",
];

pub(crate) const EXPERIENCE_ALIASES: &[&str] = &[
    "experience",
    "experiences",
    "work experience",
    "professional experience",
    "employment",
    "employment history",
    "work history",
    "experience professionnelle",
    "experiences professionnelles",
    "parcours professionnel",
    "emplois",
];

pub(crate) const EDUCATION_ALIASES: &[&str] = &[
    "education",
    "formation",
    "formations",
    "etudes",
    "studies",
    "academic background",
    "diplomes",
    "scolarite",
    "cursus",
    "parcours academique",
];

pub(crate) const SKILLS_ALIASES: &[&str] = &[
    "skills",
    "technical skills",
    "competences",
    "competences techniques",
    "savoir faire",
    "aptitudes",
    "technologies",
    "outils",
    "tools",
    "expertise",
];

/// Job-title words used as entry-boundary hints in the experience section.
pub(crate) const TITLE_HINTS: &[&str] = &[
    "engineer",
    "ingenieur",
    "developer",
    "developpeur",
    "developpeuse",
    "consultant",
    "consultante",
    "manager",
    "director",
    "directeur",
    "directrice",
    "responsable",
    "chef de projet",
    "lead",
    "architect",
    "architecte",
    "analyst",
    "analyste",
    "technicien",
    "technicienne",
    "stagiaire",
    "intern",
    "alternant",
    "alternante",
    "freelance",
    "designer",
    "assistant",
    "assistante",
    "chercheur",
    "founder",
    "fondateur",
];

/// Degree words used as entry-boundary hints in the education section.
pub(crate) const DEGREE_HINTS: &[&str] = &[
    "master",
    "licence",
    "bachelor",
    "bts",
    "dut",
    "but",
    "doctorat",
    "phd",
    "mba",
    "bac",
    "baccalaureat",
    "ingenieur",
    "diplome",
    "certificat",
    "certification",
    "cap",
    "deug",
    "msc",
    "bsc",
    "prepa",
    "classe preparatoire",
];

/// Institution-type words used by the education fallback detector.
pub(crate) const SCHOOL_KEYWORDS: &[&str] = &[
    "universite",
    "university",
    "ecole",
    "school",
    "institut",
    "institute",
    "faculte",
    "faculty",
    "college",
    "lycee",
    "campus",
    "polytechnique",
    "sorbonne",
    "sciences po",
];

/// Words meaning "this is my current position", French and English.
pub(crate) const CURRENT_KEYWORDS: &[&str] = &[
    "present",
    "aujourd'hui",
    "aujourd hui",
    "current",
    "currently",
    "en cours",
    "en poste",
    "actuel",
    "actuelle",
    "actuellement",
    "now",
    "today",
    "maintenant",
];

/// Month-name prefixes, French and English, matched case-insensitively.
pub(crate) const MONTH_PREFIXES: &[&str] = &[
    "jan", "fev", "feb", "mar", "avr", "apr", "mai", "may", "juin", "jun", "juil", "jul", "aout",
    "aug", "sep", "oct", "nov", "dec",
];

/// City vocabulary for the location heuristic. Folded, lowercase.
pub(crate) const KNOWN_CITIES: &[&str] = &[
    "paris",
    "lyon",
    "marseille",
    "toulouse",
    "bordeaux",
    "lille",
    "nantes",
    "nice",
    "strasbourg",
    "rennes",
    "grenoble",
    "montpellier",
    "london",
    "londres",
    "berlin",
    "munich",
    "madrid",
    "barcelona",
    "barcelone",
    "amsterdam",
    "brussels",
    "bruxelles",
    "geneva",
    "geneve",
    "lausanne",
    "zurich",
    "luxembourg",
    "montreal",
    "quebec",
    "new york",
    "san francisco",
    "dublin",
    "lisbon",
    "lisbonne",
    "casablanca",
    "rabat",
    "tunis",
    "alger",
    "dakar",
    "abidjan",
];

/// Label prefixes stripped from the first skills line.
pub(crate) const SKILLS_LABELS: &[&str] = &[
    "skills",
    "technical skills",
    "competences",
    "competences techniques",
];

/// Technical-skill vocabulary for the whole-text skills fallback.
/// Folded, lowercase; casing for output is taken from the matched line.
pub(crate) const TECH_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "go",
    "c++",
    "c#",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "scala",
    "r",
    "matlab",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "oracle",
    "sqlite",
    "html",
    "css",
    "sass",
    "react",
    "angular",
    "vue",
    "svelte",
    "node",
    "django",
    "flask",
    "fastapi",
    "spring",
    "laravel",
    "symfony",
    "rails",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "jenkins",
    "gitlab",
    "github",
    "git",
    "linux",
    "bash",
    "aws",
    "azure",
    "gcp",
    "kafka",
    "spark",
    "hadoop",
    "airflow",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "graphql",
    "rest",
    "grpc",
    "excel",
    "power bi",
    "tableau",
    "figma",
    "photoshop",
    "illustrator",
    "jira",
    "confluence",
    "agile",
    "scrum",
    "kanban",
];
