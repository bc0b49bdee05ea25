//! C++ keyword and type tables.

use once_cell::sync::Lazy;

use super::c_family::CFamily;

pub static CPP: Lazy<CFamily> = Lazy::new(|| CFamily::new(KEYWORDS, TYPES));

const KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "break", "case",
    "catch", "class", "compl", "concept", "const", "consteval", "constexpr", "constinit",
    "const_cast", "continue", "co_await", "co_return", "co_yield", "decltype", "default",
    "delete", "do", "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false",
    "final", "for", "friend", "goto", "if", "inline", "mutable", "namespace", "new", "noexcept",
    "not", "not_eq", "nullptr", "operator", "or", "or_eq", "override", "private", "protected",
    "public", "register", "reinterpret_cast", "requires", "return", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "using", "virtual",
    "volatile", "while", "xor", "xor_eq",
];

const TYPES: &[&str] = &[
    // Fundamental types
    "bool", "char", "char8_t", "char16_t", "char32_t", "double", "float", "int", "long",
    "short", "signed", "unsigned", "void", "wchar_t",
    // Fixed-width and size types
    "size_t", "ssize_t", "ptrdiff_t", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t",
    "uint16_t", "uint32_t", "uint64_t", "intptr_t", "uintptr_t",
    // Standard library
    "string", "string_view", "vector", "map", "set", "unordered_map", "unordered_set",
    "multimap", "multiset", "array", "list", "forward_list", "deque", "queue",
    "priority_queue", "stack", "pair", "tuple", "optional", "variant", "any", "shared_ptr",
    "unique_ptr", "weak_ptr", "function", "thread", "mutex", "atomic", "istream", "ostream",
    "iostream", "ifstream", "ofstream", "fstream", "stringstream",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_disjoint() {
        assert!(KEYWORDS.iter().all(|k| !TYPES.contains(k)));
    }
}
