//! End-to-end highlighting scenarios with the built-in profiles

use glint_core::{highlight, tokens, Category, ProfileRegistry, Token};

fn tokens_of(source: &str, key: &str) -> Vec<Token> {
    tokens(&highlight(source, key).unwrap()).unwrap()
}

fn texts(tokens: &[Token], category: Category) -> Vec<&str> {
    tokens
        .iter()
        .filter(|t| t.category == category)
        .map(|t| t.text.as_str())
        .collect()
}

#[test]
fn test_empty_input_produces_empty_output() {
    assert_eq!(highlight("", "java").unwrap(), "");
    assert_eq!(highlight("", "python").unwrap(), "");
}

#[test]
fn test_control_keyword_with_paren_is_function_call() {
    assert_eq!(
        highlight("if(x)", "java").unwrap(),
        "<span class=\"hl-function\">if</span>(x)"
    );
}

#[test]
fn test_comment_line_then_declaration() {
    let out = highlight("// totalScore 42\nint totalScore = 42;", "java").unwrap();
    assert_eq!(
        out,
        "<span class=\"hl-comment\">// totalScore 42</span>\n\
         <span class=\"hl-builtin\">int</span> totalScore = <span class=\"hl-number\">42</span>;"
    );

    let tokens = tokens(&out).unwrap();
    assert_eq!(texts(&tokens, Category::Comment), vec!["// totalScore 42"]);
    assert!(tokens.iter().all(|t| t.text != "totalScore"));
}

#[test]
fn test_unterminated_string_does_not_shield_next_line() {
    let source = "String s = \"oops;\nint count = 7;";
    let tokens = tokens_of(source, "java");

    assert!(texts(&tokens, Category::String).is_empty());
    assert_eq!(texts(&tokens, Category::Builtin), vec!["int"]);
    assert_eq!(texts(&tokens, Category::Number), vec!["7"]);
    // The stray quote leaves the rest of its own line exposed too
    assert_eq!(texts(&tokens, Category::Type), vec!["String"]);
}

#[test]
fn test_literals_hide_keywords_and_numbers() {
    let source = "String msg = \"return 42 if null\"; /* for 7 */ int k = 1;";
    let tokens = tokens_of(source, "java");

    assert_eq!(
        texts(&tokens, Category::String),
        vec!["\"return 42 if null\""]
    );
    assert_eq!(texts(&tokens, Category::Comment), vec!["/* for 7 */"]);
    assert_eq!(texts(&tokens, Category::Number), vec!["1"]);
    assert!(texts(&tokens, Category::Keyword).is_empty());
}

#[test]
fn test_java_solution_snippet() {
    let source = r#"@Override
public int maxProfit(int[] prices) {
    int best = 0; // running best
    for (int i = 1; i < prices.length; i++) {
        best = Math.max(best, prices[i] - prices[i - 1]);
    }
    return best;
}"#;
    let tokens = tokens_of(source, "java");

    assert_eq!(texts(&tokens, Category::Annotation), vec!["@Override"]);
    assert_eq!(texts(&tokens, Category::Function), vec!["maxProfit", "max"]);
    assert_eq!(texts(&tokens, Category::Keyword), vec!["public", "for", "return"]);
    assert_eq!(texts(&tokens, Category::Type), vec!["Math"]);
    assert_eq!(texts(&tokens, Category::Number), vec!["0", "1", "1"]);
    assert_eq!(texts(&tokens, Category::Comment), vec!["// running best"]);

    for token in &tokens {
        assert_eq!(&source[token.start..token.end], token.text);
    }
}

#[test]
fn test_python_solution_snippet() {
    let source = "@lru_cache(None)\ndef fib(n):\n    # base case\n    if n < 2:\n        return n\n    return fib(n - 1) + fib(n - 2)\n";
    let tokens = tokens_of(source, "python");

    assert_eq!(texts(&tokens, Category::Annotation), vec!["@lru_cache"]);
    assert_eq!(texts(&tokens, Category::Function), vec!["fib", "fib", "fib"]);
    assert_eq!(
        texts(&tokens, Category::Keyword),
        vec!["def", "if", "return", "return"]
    );
    assert_eq!(texts(&tokens, Category::Builtin), vec!["None"]);
    assert_eq!(texts(&tokens, Category::Comment), vec!["# base case"]);
    assert_eq!(texts(&tokens, Category::Number), vec!["2", "1", "2"]);
    // No type heuristic in the python profile
    assert!(texts(&tokens, Category::Type).is_empty());
}

#[test]
fn test_markup_characters_in_strings_are_escaped() {
    let out = highlight("s = \"<script>&\"", "python").unwrap();
    assert_eq!(
        out,
        "s = <span class=\"hl-string\">\"&lt;script&gt;&amp;\"</span>"
    );
}

#[test]
fn test_non_code_text_is_best_effort() {
    let source = "Grüße, 世界! \u{0}\u{7f} ??? 12ab 34";
    let tokens = tokens_of(source, "java");
    assert_eq!(texts(&tokens, Category::Number), vec!["34"]);
    assert_eq!(texts(&tokens, Category::Type), vec!["Grüße"]);
}

#[test]
fn test_word_boundaries_are_unicode_aware() {
    // Letters outside ASCII are word characters, so digits glued to them
    // are not numbers and a capitalized word is a type as a whole
    let tokens = tokens_of("é42 + 7; Ärger Grüße", "java");
    assert_eq!(texts(&tokens, Category::Number), vec!["7"]);
    assert_eq!(texts(&tokens, Category::Type), vec!["Grüße"]);
}

#[test]
fn test_registry_highlight_matches_free_function() {
    let registry = ProfileRegistry::builtin().unwrap();
    let source = "while (true) { x++; }";
    assert_eq!(
        registry.highlight(source, "c-like").unwrap(),
        highlight(source, "java").unwrap()
    );
}

#[test]
fn test_concurrent_highlighting() {
    let registry = ProfileRegistry::builtin().unwrap();
    let expected = registry.highlight("int x = 1;", "java").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| registry.highlight("int x = 1;", "java").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
