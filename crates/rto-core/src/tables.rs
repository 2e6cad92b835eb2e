//! Built-in dictionary tables shared by every file.
//!
//! Order is significant: a word's position is its token index, so these
//! lists are append-only as far as existing artifacts are concerned.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Cross-language words, roughly longest first. Served as `~^N`.
pub const GLOBAL_WORDS: &[&str] = &[
    "requestAnimationFrame", "DOMContentLoaded", "addEventListener",
    "querySelectorAll", "stopPropagation", "getElementById", "preventDefault",
    "createElement", "querySelector", "getAttribute", "setAttribute", "textContent",
    "reinterpret_cast", "dynamic_cast", "static_cast", "previousSibling",
    "nextSibling", "appendChild", "removeChild", "constructor", "abstractmethod",
    "staticmethod", "classmethod", "isinstance", "issubclass", "enumerate",
    "dataclass", "transparent", "background", "blockquote", "childNodes", "figcaption",
    "firstChild", "instanceof", "parentNode", "startsWith", "transition", "visibility",
    "animation", "arguments", "classList", "className", "component", "constexpr",
    "innerHTML", "lastChild", "namespace", "protected", "prototype", "secondary",
    "subscribe", "transform", "undefined", "absolute", "basename", "callback",
    "checkout", "children", "contains", "continue", "disabled", "dispatch", "document",
    "encoding", "endpoint", "endsWith", "explicit", "external", "function", "includes",
    "internal", "lifetime", "noexcept", "nonlocal", "optional", "overflow", "override",
    "position", "previous", "property", "readonly", "realpath", "register", "relative",
    "required", "response", "selected", "settings", "template", "textarea", "typename",
    "unsigned", "upstream", "validate", "volatile", "HashMap", "HashSet", "Promise",
    "RefCell", "against", "article", "because", "between", "boolean", "checked",
    "content", "context", "current", "default", "details", "dirname", "display",
    "element", "enabled", "entries", "extends", "factory", "finally", "further",
    "getopts", "handler", "headers", "include", "indexOf", "inherit", "initial",
    "invalid", "isArray", "isEmpty", "justify", "manager", "matches", "message",
    "nullptr", "opacity", "options", "outline", "padding", "payload", "primary",
    "private", "process", "publish", "receive", "replace", "request", "reverse",
    "section", "service", "session", "success", "summary", "through", "timeout",
    "typedef", "virtual", "visible", "warning", "whereis", "without", "Option",
    "Result", "String", "action", "active", "append", "assert", "before", "border",
    "bottom", "branch", "buffer", "button", "canvas", "center", "column", "commit",
    "concat", "config", "cookie", "create", "cursor", "custom", "define", "delete",
    "derive", "dialog", "double", "during", "enable", "except", "expect", "export",
    "extern", "figure", "filter", "footer", "format", "global", "handle", "header",
    "height", "hidden", "ifndef", "iframe", "import", "inline", "insert", "lambda",
    "length", "listen", "margin", "method", "module", "notify", "nowrap", "number",
    "object", "option", "orange", "origin", "output", "params", "parent", "plugin",
    "pragma", "public", "purple", "radius", "rebase", "reduce", "remote", "remove",
    "render", "result", "return", "search", "select", "shadow", "should", "signal",
    "signed", "sizeof", "source", "splice", "static", "status", "stderr", "stdout",
    "sticky", "stream", "string", "struct", "switch", "target", "toggle", "typeof",
    "update", "values", "verify", "widget", "window", "yellow", "about", "above",
    "admin", "after", "again", "align", "array", "async", "await", "being", "below",
    "black", "block", "break", "brown", "build", "cache", "catch", "check", "child",
    "class", "clear", "clone", "close", "color", "const", "count", "could", "debug",
    "empty", "endif", "error", "event", "false", "fetch", "field", "final", "first",
    "fixed", "float", "flush", "found", "frame", "graph", "green", "guard", "guide",
    "index", "input", "items", "light", "local", "match", "merge", "model", "muted",
    "print", "props", "query", "queue", "raise", "range", "reset", "right", "route",
    "short", "slice", "solid", "space", "split", "stack", "start", "state", "stash",
    "store", "strip", "style", "super", "table", "tbody", "thead", "their", "there",
    "these", "thing", "throw", "token", "trait", "tuple", "union", "until", "value",
    "video", "while", "white", "width", "would", "write", "xargs", "yield", "args",
    "base", "bind", "body", "bool", "call", "case", "char", "code", "copy", "core",
    "data", "dict", "diff", "done", "each", "echo", "edit", "elif", "else", "emit",
    "enum", "eval", "exec", "exit", "file", "fill", "find", "flex", "font", "fork",
    "form", "from", "func", "gets", "goto", "gray", "grep", "grid", "have", "head",
    "help", "here", "hide", "home", "host", "href", "html", "http", "icon", "impl",
    "info", "init", "into", "item", "iter", "join", "json", "just", "keep", "keys",
    "kill", "kind", "last", "left", "line", "link", "list", "load", "lock", "logo",
    "long", "loop", "main", "make", "many", "menu", "meta", "mode", "more", "most",
    "move", "much", "must", "name", "next", "node", "none", "null", "once", "only",
    "open", "over", "pack", "page", "pair", "pass", "path", "pipe", "plan", "play",
    "port", "post", "prev", "pull", "push", "read", "rect", "root", "rule", "safe",
    "same", "save", "seek", "send", "show", "shut", "sign", "size", "skip", "slot",
    "some", "sort", "span", "spec", "step", "stop", "such", "swap", "sync", "tail",
    "take", "task", "temp", "term", "test", "text", "than", "that", "them", "then",
    "they", "this", "time", "todo", "tree", "trim", "true", "type", "uint", "uniq",
    "unit", "unix", "user", "utf8", "vary", "very", "view", "void", "wait", "walk",
    "want", "warn", "what", "when", "will", "with", "word", "work", "wrap", "yaml",
    "year", "zero",
];

const PYTHON_WORDS: &[&str] = &[
    "self", "def", "None", "True", "False", "print", "len", "str", "int", "dict",
    "list", "set", "tuple", "range", "enumerate", "zip", "isinstance", "issubclass",
    "super", "yield", "with", "as", "lambda", "pass", "raise", "except", "finally",
    "try", "import", "from", "class", "return", "if", "elif", "else", "for", "while",
    "break", "continue", "and", "or", "not", "in", "is", "del", "global", "nonlocal",
    "assert", "async", "await",
];

const JAVASCRIPT_WORDS: &[&str] = &[
    "function", "return", "var", "let", "const", "if", "else", "for", "while", "do",
    "switch", "case", "default", "break", "continue", "try", "catch", "finally",
    "throw", "new", "delete", "typeof", "instanceof", "void", "this", "arguments",
    "super", "class", "extends", "implements", "interface", "package", "private",
    "protected", "public", "static", "yield", "await", "async", "import", "export",
    "null", "true", "false", "undefined", "NaN", "Infinity",
];

const C_WORDS: &[&str] = &[
    "int", "char", "float", "double", "void", "long", "short", "unsigned", "signed",
    "const", "static", "volatile", "extern", "register", "auto", "struct", "union",
    "enum", "typedef", "sizeof", "return", "if", "else", "for", "while", "do",
    "switch", "case", "default", "break", "continue", "goto", "include", "define",
    "ifdef", "ifndef", "endif", "pragma",
];

const RUST_WORDS: &[&str] = &[
    "fn", "let", "mut", "const", "static", "if", "else", "for", "while", "loop",
    "match", "break", "continue", "return", "struct", "enum", "impl", "trait", "pub",
    "mod", "use", "crate", "self", "super", "as", "where", "type", "unsafe", "extern",
    "ref", "move", "dyn", "async", "await", "Some", "None", "Ok", "Err", "Result",
    "Option", "Vec", "String", "Box", "Rc", "Arc", "Cell", "RefCell", "Mutex",
    "RwLock", "HashMap", "HashSet", "BTreeMap", "BTreeSet", "println", "print",
    "format", "panic", "assert", "debug_assert", "cfg", "derive", "Clone", "Copy",
    "Debug", "Default", "PartialEq", "Eq", "PartialOrd", "Ord", "Hash", "Send", "Sync",
    "Sized", "Drop", "Fn", "FnMut", "FnOnce", "Iterator", "IntoIterator", "From",
    "Into", "TryFrom", "TryInto", "AsRef", "AsMut", "Deref", "DerefMut", "Display",
    "Error", "usize", "isize", "u8", "u16", "u32", "u64", "u128", "i8", "i16", "i32",
    "i64", "i128", "f32", "f64", "bool", "char", "str", "lifetime", "macro_rules",
    "macro_export", "allow", "deny", "warn", "must_use", "inline", "test", "bench",
    "feature", "serde", "tokio", "anyhow", "thiserror",
];

const SHELL_WORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "in", "do", "done", "while", "until",
    "case", "esac", "function", "return", "local", "export", "readonly", "declare",
    "typeset", "unset", "shift", "exit", "break", "continue", "source", "eval", "exec",
    "trap", "set", "shopt", "getopts", "read", "echo", "printf", "test", "true",
    "false", "cd", "pwd", "pushd", "popd", "dirs", "ls", "cp", "mv", "rm", "mkdir",
    "rmdir", "touch", "cat", "head", "tail", "grep", "sed", "awk", "cut", "sort",
    "uniq", "wc", "tr", "xargs", "find", "basename", "dirname", "realpath", "readlink",
    "which", "whereis", "type", "command", "alias", "unalias", "bg", "fg", "jobs",
    "kill", "wait", "nohup", "disown", "ps", "top", "htop", "df", "du", "free",
    "uname", "hostname", "whoami", "id", "groups", "sudo", "su", "chown", "chmod",
    "chgrp", "umask", "tar", "gzip", "gunzip", "zip", "unzip", "curl", "wget", "ssh",
    "scp", "rsync", "git", "make", "npm", "pip", "PATH", "HOME", "USER", "SHELL",
    "PWD", "OLDPWD", "IFS", "BASH", "BASH_VERSION", "RANDOM", "LINENO", "FUNCNAME",
    "PIPESTATUS",
];

/// An ordered word list with a reverse index.
#[derive(Debug)]
pub struct WordTable {
    words: &'static [&'static str],
    positions: HashMap<&'static str, usize>,
}

impl WordTable {
    pub fn new(words: &'static [&'static str]) -> Self {
        let mut positions = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            // First occurrence wins.
            positions.entry(*word).or_insert(i);
        }
        Self { words, positions }
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.words.get(index).copied()
    }

    pub fn position(&self, word: &str) -> Option<usize> {
        self.positions.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

static GLOBAL: LazyLock<WordTable> = LazyLock::new(|| WordTable::new(GLOBAL_WORDS));

static EMPTY: LazyLock<WordTable> = LazyLock::new(|| WordTable::new(&[]));

static TYPES: LazyLock<HashMap<&'static str, WordTable>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("py", WordTable::new(PYTHON_WORDS));
    m.insert("js", WordTable::new(JAVASCRIPT_WORDS));
    m.insert("c", WordTable::new(C_WORDS));
    m.insert("rs", WordTable::new(RUST_WORDS));
    m.insert("sh", WordTable::new(SHELL_WORDS));
    m.insert("bash", WordTable::new(SHELL_WORDS));
    m
});

/// The global tier.
pub fn global_words() -> &'static WordTable {
    &GLOBAL
}

/// The type tier for a language tag. Unknown tags get an empty table.
pub fn type_words(language: &str) -> &'static WordTable {
    TYPES.get(language).unwrap_or(&*EMPTY)
}

/// Tags with a type table, sorted.
pub fn known_languages() -> Vec<&'static str> {
    let mut tags: Vec<_> = TYPES.keys().copied().collect();
    tags.sort_unstable();
    tags
}
