//! English word lists used by the rule tagger. All entries are lowercase.

use crate::nlp::PosTag;

/// Stoplist with the coverage of the common English NLP stop-word sets.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount",
    "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "bottom", "but", "by", "call", "can", "cannot", "could", "did", "do",
    "does", "doing", "done", "down", "due", "during", "each", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "first", "five", "for", "former",
    "formerly", "forty", "four", "from", "front", "full", "further", "get", "give", "go", "had",
    "has", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon",
    "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "if", "in",
    "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last", "latter", "latterly",
    "least", "less", "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "quite", "rather", "re", "really", "regarding", "same",
    "say", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should",
    "show", "side", "since", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "third", "this", "those", "though",
    "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top", "toward",
    "towards", "twelve", "twenty", "two", "under", "unless", "until", "up", "upon", "us", "used",
    "using", "various", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "another", "such", "what", "which", "whatever",
];

/// Possessive determiners. They may open a noun phrase like a determiner.
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their", "whose"];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "who", "whom", "whoever", "someone", "something",
    "anyone", "anything", "everyone", "everything", "nobody", "nothing", "none",
];

/// Pronouns that are typically followed by a finite verb.
pub const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "we", "they", "it", "who"];

const ADPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "amongst", "around", "as",
    "at", "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
    "despite", "during", "except", "for", "from", "in", "inside", "into", "near", "of", "off",
    "on", "onto", "out", "outside", "over", "per", "since", "through", "throughout", "thru",
    "toward", "towards", "under", "underneath", "until", "upon", "via", "with", "within",
    "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "because", "although", "though", "while", "whereas",
    "if", "unless", "whether", "than", "that", "once",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

/// Auxiliaries after which the next open-class word is read as a verb.
pub const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "do", "does",
    "did",
];

const PARTICLES: &[&str] = &["to", "not", "n't"];

const ADVERBS: &[&str] = &[
    "also", "very", "too", "just", "then", "now", "here", "there", "always", "never", "often",
    "sometimes", "already", "still", "soon", "again", "almost", "even", "ever", "well", "how",
    "when", "where", "why", "however", "quite", "rather", "together", "only", "more", "most",
    "less", "least", "much",
];

/// Frequent open-class verbs that carry no telltale suffix.
const VERBS: &[&str] = &[
    "need", "want", "use", "build", "built", "lead", "led", "manage", "develop", "design",
    "create", "know", "knew", "work", "join", "help", "make", "made", "run", "ran", "write",
    "wrote", "ship", "deliver", "drive", "drove", "own", "seek", "seeking", "look", "require",
    "include", "includes", "support", "collaborate", "implement", "maintain", "improve",
    "ensure", "apply", "hire", "love", "like", "enjoy", "thrive", "bring", "brought", "take",
    "took", "get", "got", "give", "gave", "grow", "grew", "learn", "teach", "taught", "solve",
    "mentor", "partner", "launch", "scale", "reduce", "increase", "achieve", "architect",
    "contribute", "provide", "offer", "am", "seem", "become", "became", "believe", "think",
];

/// Frequent adjectives that carry no telltale suffix.
const ADJECTIVES: &[&str] = &[
    "experienced", "skilled", "familiar", "strong", "good", "great", "new", "old", "senior",
    "junior", "excellent", "solid", "deep", "broad", "proven", "large", "small", "big", "fast",
    "high", "low", "modern", "open", "remote", "hybrid", "full", "native", "key", "main",
    "best", "better", "top", "agile", "lean", "smart", "clean", "robust", "scalable", "complex",
    "simple", "cross", "several", "many", "few", "various", "other", "same", "own", "able",
    "responsible", "proficient", "passionate", "current", "previous",
    "relevant", "efficient", "independent", "different", "recent", "fluent", "competent",
];

/// Nouns that would otherwise be caught by a verb or adjective suffix rule.
const NOUN_EXCEPTIONS: &[&str] = &[
    "engineering", "learning", "training", "testing", "computing", "programming", "marketing",
    "networking", "accounting", "consulting", "building", "meeting", "hosting", "logging",
    "monitoring", "scheduling", "processing", "modeling", "modelling", "planning", "reporting",
    "backend", "frontend", "proposal", "approval", "arrival", "rental", "portal",
    "signal", "terminal", "journal", "hospital", "capital", "principal", "speed", "feed",
    "seed", "bed", "agent", "client", "student",
    "talent", "content", "event", "component", "environment", "department", "management",
    "development", "deployment", "experience", "science", "knowledge", "team", "work",
];

/// Acronyms that collide with closed-class words when upper-cased.
pub const ACRONYM_EXCEPTIONS: &[&str] = &["IT", "US", "OR", "AS", "DO"];

pub fn is_stop_word(lower: &str) -> bool {
    STOP_WORDS.contains(&lower)
}

pub fn is_noun_exception(lower: &str) -> bool {
    NOUN_EXCEPTIONS.contains(&lower)
}

/// Tag for a closed-class word, if `lower` is one.
pub fn closed_class(lower: &str) -> Option<PosTag> {
    if PARTICLES.contains(&lower) {
        Some(PosTag::Particle)
    } else if DETERMINERS.contains(&lower) || POSSESSIVES.contains(&lower) {
        Some(PosTag::Determiner)
    } else if PRONOUNS.contains(&lower) {
        Some(PosTag::Pronoun)
    } else if AUXILIARIES.contains(&lower) {
        Some(PosTag::Auxiliary)
    } else if ADPOSITIONS.contains(&lower) {
        Some(PosTag::Adposition)
    } else if CONJUNCTIONS.contains(&lower) {
        Some(PosTag::Conjunction)
    } else if ADVERBS.contains(&lower) {
        Some(PosTag::Adverb)
    } else {
        None
    }
}

/// Tag for a known open-class verb or adjective.
pub fn open_class(lower: &str) -> Option<PosTag> {
    if NOUN_EXCEPTIONS.contains(&lower) {
        Some(PosTag::Noun)
    } else if ADJECTIVES.contains(&lower) {
        Some(PosTag::Adjective)
    } else if VERBS.contains(&lower) {
        Some(PosTag::Verb)
    } else {
        None
    }
}
