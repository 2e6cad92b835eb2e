use crate::*;
use crate::analysis::{shannon_entropy, whitespace_ratio};
use crate::dictionary::{classify, select_frequent};
use crate::expand::{expand_body, Tables};
use crate::extract::extract_words;
use crate::header::{strip_fuzz_trailer, FORMAT_VERSION};
use crate::substitute::{escape_tildes, substitute};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rto_core::{global_words, type_words, CodecConfig, Tier, Token};

fn roundtrip(text: &[u8], language: &str) -> Vec<u8> {
    expand(&compress(text, language))
}

fn split_body(compressed: &[u8]) -> (&[u8], &[u8]) {
    let nl = compressed.iter().position(|&b| b == b'\n').unwrap();
    (&compressed[..nl], &compressed[nl + 1..])
}

/// Distinct letter-only words that are in neither built-in table.
fn unlisted_words(n: usize) -> Vec<String> {
    let letters = b"bcdfghjklm";
    (0..n)
        .map(|i| {
            let a = letters[i / letters.len() % letters.len()] as char;
            let b = letters[i % letters.len()] as char;
            format!("zq{a}{b}x")
        })
        .collect()
}

// ========== Extraction ==========

#[test]
fn test_extract_maximal_runs() {
    let words = extract_words(b"foo_bar baz1qux abcd", 4);
    let found: Vec<_> = words.iter().map(|c| (c.word, c.offset)).collect();
    assert_eq!(found, vec![("foo_bar", 0), ("abcd", 16)]);
}

#[test]
fn test_extract_keeps_duplicates() {
    let words = extract_words(b"loop loop, loop", 4);
    assert_eq!(words.len(), 3);
}

#[test]
fn test_extract_empty() {
    assert!(extract_words(b"", 4).is_empty());
    assert!(extract_words(b"  \n\t 12 34", 1).is_empty());
}

#[test]
fn test_extract_ignores_non_ascii() {
    let words = extract_words("caf\u{e9}s naive".as_bytes(), 4);
    let found: Vec<_> = words.iter().map(|c| c.word).collect();
    assert_eq!(found, vec!["naive"]);
}

#[test]
fn test_extract_skips_runs_touching_digits() {
    let words = extract_words(b"utf8_decode sha1_decode decode2 md5sum decode", 4);
    let found: Vec<_> = words.iter().map(|c| c.word).collect();
    assert_eq!(found, vec!["decode"]);
}

#[test]
fn test_identifier_fragments_not_in_header() {
    let text = b"utf8_decode utf8_decode utf8_decode sha1_decode";
    let out = compress(text, "");
    let (header_line, body) = split_body(&out);
    assert!(Header::parse(header_line).unwrap().local.is_empty());
    assert_eq!(body, text);
}

// ========== Selection & Classification ==========

#[test]
fn test_select_threshold_is_three() {
    // Two occurrences never qualify even though the design notes once said
    // "at least two"; the enforced rule is strictly more than two.
    let config = CodecConfig::default();
    assert!(select_frequent(b"gamma gamma", &config).is_empty());
    assert_eq!(select_frequent(b"gamma gamma gamma", &config), vec!["gamma"]);
}

#[test]
fn test_select_orders_by_length() {
    let text = b"abcd abcd abcd abcdefg abcdefg abcdefg abcdefg";
    let words = select_frequent(text, &CodecConfig::default());
    assert_eq!(words, vec!["abcdefg", "abcd"]);
}

#[test]
fn test_select_length_ties_keep_first_seen() {
    let text = b"wxyz qrst wxyz qrst wxyz qrst";
    let words = select_frequent(text, &CodecConfig::default());
    assert_eq!(words, vec!["wxyz", "qrst"]);
}

#[test]
fn test_select_length_ties_ignore_count() {
    // `beta` is seen first but `gama` is more frequent.
    let text = b"beta beta beta gama gama gama gama";
    let words = select_frequent(text, &CodecConfig::default());
    assert_eq!(words, vec!["beta", "gama"]);
    let out = compress(text, "");
    let (header_line, body) = split_body(&out);
    let header = Header::parse(header_line).unwrap();
    assert_eq!(header.local.get(0), Some("beta"));
    assert_eq!(body, b"~0 ~0 ~0 ~1 ~1 ~1 ~1");
}

#[test]
fn test_select_cap_keeps_most_frequent() {
    let text = b"aaaa aaaa aaaa bbbbbb bbbbbb bbbbbb bbbbbb cccc cccc cccc cccc cccc";
    let config = CodecConfig::default().with_max_local_entries(2);
    let words = select_frequent(text, &config);
    assert_eq!(words, vec!["bbbbbb", "cccc"]);
}

#[test]
fn test_select_respects_min_length() {
    let text = b"abc abc abc abcd abcd abcd";
    assert_eq!(select_frequent(text, &CodecConfig::default()), vec!["abcd"]);
    let config = CodecConfig::default().with_min_word_length(3);
    assert_eq!(select_frequent(text, &config), vec!["abcd", "abc"]);
}

#[test]
fn test_classify_tiers() {
    let words = vec!["function".to_string(), "self".to_string(), "zqbbx".to_string()];
    let c = classify(&words, global_words(), type_words("py"));
    let function_idx = global_words().position("function").unwrap();
    assert_eq!(c.plan[0].token, Token::global(function_idx));
    assert_eq!(c.plan[1].token, Token::type_word(0));
    assert_eq!(c.plan[2].token, Token::local(0));
    assert_eq!(c.local.len(), 1);
    assert_eq!(c.local.get(0), Some("zqbbx"));
    assert_eq!(c.count(Tier::Global), 1);
    assert_eq!(c.count(Tier::Type), 1);
    assert_eq!(c.count(Tier::Local), 1);
}

#[test]
fn test_classify_unknown_language_falls_to_local() {
    let words = vec!["self".to_string()];
    let c = classify(&words, global_words(), type_words("zz"));
    assert_eq!(c.plan[0].token, Token::local(0));
}

#[test]
fn test_classify_one_token_per_word() {
    let text = b"print print print self self self zqbbx zqbbx zqbbx return return return";
    let words = select_frequent(text, &CodecConfig::default());
    let c = classify(&words, global_words(), type_words("py"));
    let mut seen = std::collections::HashSet::new();
    for s in &c.plan {
        assert!(seen.insert(s.word.clone()), "{} classified twice", s.word);
    }
    assert_eq!(c.plan.len(), 4);
}

#[test]
fn test_classify_is_deterministic() {
    let words: Vec<String> = unlisted_words(20);
    let a = classify(&words, global_words(), type_words("rs"));
    let b = classify(&words, global_words(), type_words("rs"));
    assert_eq!(a.plan, b.plan);
    assert_eq!(a.local, b.local);
}

// ========== Substitution ==========

#[test]
fn test_escape_tildes() {
    assert_eq!(escape_tildes(b"a~b~~c"), b"a~~b~~~~c".to_vec());
    assert_eq!(escape_tildes(b""), b"".to_vec());
}

#[test]
fn test_substitute_whole_words_only() {
    let plan = vec![Substitution { word: "aaaa".into(), token: Token::local(0) }];
    let out = substitute(b"aaaa aaaab _aaaa aaaa1 (aaaa) 9aaaa", &plan);
    assert_eq!(out, b"~0 aaaab _aaaa aaaa1 (~0) 9aaaa".to_vec());
}

#[test]
fn test_substitute_next_to_tilde() {
    let plan = vec![Substitution { word: "aaaa".into(), token: Token::local(0) }];
    let out = substitute(&escape_tildes(b"~aaaa~"), &plan);
    assert_eq!(out, b"~~~0~~".to_vec());
}

#[test]
fn test_substitute_does_not_rescan_tokens() {
    // With one-letter words allowed, "a" must not be found inside "~a".
    let plan = vec![
        Substitution { word: "long".into(), token: Token::local(10) },
        Substitution { word: "a".into(), token: Token::local(0) },
    ];
    let out = substitute(b"long a", &plan);
    assert_eq!(out, b"~a ~0".to_vec());
}

#[test]
fn test_substitute_empty_plan() {
    assert_eq!(substitute(b"text", &[]), b"text".to_vec());
}

// ========== Header ==========

#[test]
fn test_header_roundtrip() {
    let mut local = LocalDictionary::new();
    local.push("alpha");
    local.push("beta");
    let header = Header::new(local, "py").with_meta(FileMeta {
        name: Some("main.py".into()),
        mtime: Some(1732500000.5),
        mode: Some(0o644),
    });
    let line = header.encode();
    assert_eq!(line.iter().filter(|&&b| b == b'\n').count(), 1);
    assert_eq!(line.last(), Some(&b'\n'));
    let parsed = Header::parse(&line[..line.len() - 1]).unwrap();
    assert_eq!(parsed, header);
}

#[test]
fn test_header_empty_language_omitted() {
    let line = Header::default().encode();
    assert_eq!(line, b"{\"v\":\"1.2\",\"m\":{}}\n".to_vec());
}

#[test]
fn test_header_language_with_newline_stays_on_one_line() {
    let header = Header::new(LocalDictionary::new(), "p\ny");
    let line = header.encode();
    assert_eq!(line.iter().filter(|&&b| b == b'\n').count(), 1);
    assert_eq!(Header::parse(&line[..line.len() - 1]).unwrap().language, "p\ny");
}

#[test]
fn test_header_empty_meta_dropped() {
    let header = Header::default().with_meta(FileMeta::default());
    assert!(header.meta.is_none());
}

#[test]
fn test_header_accepts_map_alias_and_unknown_fields() {
    let header = Header::parse(br#"{"v":"1.2","map":{"~0":"word"},"f":1,"s":42}"#).unwrap();
    assert_eq!(header.local.get(0), Some("word"));
    assert_eq!(header.version, FORMAT_VERSION);
    assert!(header.fuzzed);
}

#[test]
fn test_header_fuzz_flag_variants() {
    assert!(Header::parse(br#"{"v":"1.2","fuzzed":true}"#).unwrap().fuzzed);
    assert!(!Header::parse(br#"{"v":"1.2","f":0}"#).unwrap().fuzzed);
    assert!(!Header::parse(br#"{"v":"1.2","m":{}}"#).unwrap().fuzzed);

    let mut header = Header::default();
    header.fuzzed = true;
    assert_eq!(header.encode(), b"{\"v\":\"1.2\",\"m\":{},\"f\":1}\n".to_vec());
}

#[test]
fn test_strip_fuzz_trailer() {
    assert_eq!(strip_fuzz_trailer(b"body\n\n[FUZZ:abcXYZ]"), b"body");
    assert_eq!(strip_fuzz_trailer(b"body\n\n[FUZZ:abcXYZ]\n \n"), b"body");
    assert_eq!(strip_fuzz_trailer(b"body\n\n[FUZZ:abc]\nmore"), b"body\n\n[FUZZ:abc]\nmore");
    assert_eq!(strip_fuzz_trailer(b"body [FUZZ:abc]"), b"body [FUZZ:abc]");
}

#[test]
fn test_expand_fuzzed_artifact() {
    let artifact = b"{\"v\":\"1.2\",\"m\":{\"~0\":\"value\"},\"f\":1,\"s\":42}\n~0 ~0 ~0\n\n[FUZZ:QwErTyUiOpAsDfGhJkLz]";
    assert_eq!(expand(artifact), b"value value value".to_vec());

    // Without the flag the trailer is ordinary body text.
    let plain = b"{\"v\":\"1.2\",\"m\":{}}\nx\n\n[FUZZ:abc]";
    assert_eq!(expand(plain), b"x\n\n[FUZZ:abc]".to_vec());
}

#[test]
fn test_header_decode_errors() {
    assert!(matches!(Header::decode(b"no newline"), Err(HeaderError::MissingNewline)));
    assert!(matches!(Header::decode(b"not json\nbody"), Err(HeaderError::Malformed(_))));
    assert!(matches!(
        Header::decode(b"{\"v\":\"1.2\",\"m\":{\"~^0\":\"x\"}}\nbody"),
        Err(HeaderError::InvalidLocalToken(_))
    ));
}

#[test]
fn test_header_decode_splits_at_first_newline() {
    let (header, body) = Header::decode(b"{\"v\":\"1.2\",\"m\":{},\"ext\":\"rs\"}\nline1\nline2").unwrap();
    assert_eq!(header.language, "rs");
    assert_eq!(body, b"line1\nline2");
}

// ========== Expansion ==========

fn expand_plain(body: &[u8], language: &str) -> Vec<u8> {
    let local = LocalDictionary::new();
    let tables = Tables { local: &local, types: type_words(language), global: global_words() };
    expand_body(body, &tables)
}

#[test]
fn test_expand_escape() {
    assert_eq!(expand_plain(b"a~~b~~~~", ""), b"a~b~~".to_vec());
}

#[test]
fn test_expand_global_and_type() {
    assert_eq!(expand_plain(b"~^0;", ""), b"requestAnimationFrame;".to_vec());
    assert_eq!(expand_plain(b"~*0.x", "py"), b"self.x".to_vec());
}

#[test]
fn test_expand_decimal_index() {
    let idx = 62;
    let word = global_words().get(idx).unwrap();
    assert_eq!(expand_plain(b"(~^62)", ""), format!("({word})").into_bytes());
}

#[test]
fn test_expand_out_of_range_is_verbatim() {
    assert_eq!(expand_plain(b"~^99999 ~*0 ~5 ~^zz", ""), b"~^99999 ~*0 ~5 ~^zz".to_vec());
}

#[test]
fn test_expand_dangling_tildes() {
    assert_eq!(expand_plain(b"~", ""), b"~".to_vec());
    assert_eq!(expand_plain(b"~^", ""), b"~^".to_vec());
    assert_eq!(expand_plain(b"a ~ b", ""), b"a ~ b".to_vec());
    assert_eq!(expand_plain(b"~*", "py"), b"~*".to_vec());
}

#[test]
fn test_expand_local_lookup() {
    let mut local = LocalDictionary::new();
    local.push("alpha");
    let tables = Tables { local: &local, types: type_words(""), global: global_words() };
    assert_eq!(expand_body(b"~0 ~1 ~~0", &tables), b"alpha ~1 ~0".to_vec());
}

// ========== Codec scenarios ==========

#[test]
fn test_single_repeated_word() {
    let text = b"aaaa aaaa aaaa";
    let out = compress(text, "");
    assert_eq!(out, b"{\"v\":\"1.2\",\"m\":{\"~0\":\"aaaa\"}}\n~0 ~0 ~0".to_vec());
    assert_eq!(expand(&out), text.to_vec());
}

#[test]
fn test_lone_tilde() {
    let out = compress(b"~", "");
    let (_, body) = split_body(&out);
    assert_eq!(body, b"~~");
    assert_eq!(expand(&out), b"~".to_vec());
}

#[test]
fn test_empty_input() {
    let out = compress(b"", "");
    assert_eq!(out, b"{\"v\":\"1.2\",\"m\":{}}\n".to_vec());
    assert_eq!(expand(&out), b"".to_vec());
}

#[test]
fn test_python_receiver_uses_type_tier() {
    let text = b"def run(self):\n    self.x = 1\n    self.y = 2\n    self.z = 3\n    return self\n";
    let out = compress(text, "py");
    let (header_line, body) = split_body(&out);
    assert_eq!(
        body,
        b"def run(~*0):\n    ~*0.x = 1\n    ~*0.y = 2\n    ~*0.z = 3\n    return ~*0\n"
    );
    let header = Header::parse(header_line).unwrap();
    assert!(header.local.is_empty());
    assert_eq!(header.language, "py");
    assert_eq!(expand(&out), text.to_vec());
}

#[test]
fn test_decimal_local_indices() {
    let words = unlisted_words(70);
    let text: String = words.iter().map(|w| format!("{w} {w} {w}\n")).collect();
    let out = compress(text.as_bytes(), "");
    let (header_line, body) = split_body(&out);
    let header = Header::parse(header_line).unwrap();
    assert_eq!(header.local.len(), 70);
    assert_eq!(header.local.get(62), Some(words[62].as_str()));
    let expected_line = b"~62 ~62 ~62\n";
    assert!(body.windows(expected_line.len()).any(|w| w == expected_line));
    assert_eq!(expand(&out), text.into_bytes());
}

#[test]
fn test_rare_keyword_left_alone() {
    let text = b"function zqbbx zqbbx zqbbx";
    let out = compress(text, "js");
    let (_, body) = split_body(&out);
    assert_eq!(body, b"function ~0 ~0 ~0");
}

#[test]
fn test_threshold_boundary() {
    let out = compress(b"zqbbx zqbbx", "");
    let (_, body) = split_body(&out);
    assert_eq!(body, b"zqbbx zqbbx");
    let out = compress(b"zqbbx zqbbx zqbbx", "");
    let (_, body) = split_body(&out);
    assert_eq!(body, b"~0 ~0 ~0");
}

#[test]
fn test_cap_enforced() {
    let words = unlisted_words(70);
    let text: String = words.iter().map(|w| format!("{w} {w} {w} ")).collect();
    for cap in [0, 1, 10, 69] {
        let out = compress_with(text.as_bytes(), "", 4, cap);
        let (header_line, _) = split_body(&out);
        assert!(Header::parse(header_line).unwrap().local.len() <= cap);
        assert_eq!(expand(&out), text.as_bytes().to_vec());
    }
}

#[test]
fn test_tilde_count_preserved() {
    let text = b"~home/~user ~~ ~^0 ~*1 ~2 trailing~";
    let out = compress(text, "py");
    let restored = expand(&out);
    let count = |b: &[u8]| b.iter().filter(|&&c| c == b'~').count();
    assert_eq!(count(&restored), count(text));
    assert_eq!(restored, text.to_vec());
}

#[test]
fn test_header_lookalike_content() {
    let text = b"{\"v\":\"1.2\",\"m\":{\"~0\":\"evil\"}}\n~0 ~~ ~^1 evil evil evil";
    assert_eq!(roundtrip(text, ""), text.to_vec());
}

#[test]
fn test_non_utf8_roundtrip() {
    let text: Vec<u8> = vec![0xff, 0xfe, b'w', b'o', b'r', b'd', 0x80, b' ', b'w', b'o', b'r', b'd', 0,
        b'w', b'o', b'r', b'd', b'~', 0xc3];
    assert_eq!(roundtrip(&text, "c"), text);
}

#[test]
fn test_whitespace_only() {
    let text = b" \n\t\r\n  ";
    assert_eq!(roundtrip(text, "sh"), text.to_vec());
}

#[test]
fn test_short_words_with_min_length_one() {
    let text = b"a b c a b c a b c ~a ~^b";
    let codec = Codec::new(CodecConfig::default().with_min_word_length(1));
    let out = codec.compress(text, "py");
    assert_eq!(codec.expand(&out), text.to_vec());
}

#[test]
fn test_unknown_tag_roundtrip() {
    let text = b"self self self def def def";
    assert_eq!(roundtrip(text, "cobol"), text.to_vec());
}

// ========== Graceful degradation ==========

#[test]
fn test_expand_malformed_header() {
    assert_eq!(expand(b"not a valid header\nbody"), b"not a valid header\nbody".to_vec());
}

#[test]
fn test_expand_without_newline() {
    assert_eq!(expand(b"no newline ~~ ~^0 ~0"), b"no newline ~ requestAnimationFrame ~0".to_vec());
}

#[test]
fn test_expand_detailed_reports_header() {
    let codec = Codec::default();
    let (header, out) = codec.expand_detailed(&compress(b"zqbbx zqbbx zqbbx", "rs"));
    assert_eq!(header.unwrap().language, "rs");
    assert_eq!(out, b"zqbbx zqbbx zqbbx".to_vec());
    let (header, _) = codec.expand_detailed(b"garbage");
    assert!(header.is_none());
}

#[test]
fn test_expand_unknown_tag_in_header() {
    let out = expand(b"{\"v\":\"1.2\",\"m\":{},\"ext\":\"zz\"}\n~*0 ~^0");
    assert_eq!(out, b"~*0 requestAnimationFrame".to_vec());
}

// ========== Statistics ==========

#[test]
fn test_compression_result_stats() {
    let text = b"self self self print print print zqbbx zqbbx zqbbx";
    let result = Codec::default().compress_detailed(text, "py", None);
    assert_eq!(result.global_hits, 1);
    assert_eq!(result.type_hits, 1);
    assert_eq!(result.local_hits, 1);
    assert_eq!(result.original_len, text.len());
    assert_eq!(result.compressed_len, result.output.len());
    assert!(result.ratio() > 0.0);
}

#[test]
fn test_compression_result_empty_ratio() {
    let result = Codec::default().compress_detailed(b"", "", None);
    assert_eq!(result.ratio(), 1.0);
    assert_eq!(result.reduction_pct(), 0.0);
}

#[test]
fn test_meta_carried_through() {
    let meta = FileMeta { name: Some("a.rs".into()), mtime: None, mode: Some(0o755) };
    let result = Codec::default().compress_detailed(b"x", "rs", Some(meta.clone()));
    let (header, out) = Codec::default().expand_detailed(&result.output);
    assert_eq!(header.unwrap().meta, Some(meta));
    assert_eq!(out, b"x".to_vec());
}

// ========== Determinism & concurrency ==========

#[test]
fn test_compress_deterministic() {
    let text = include_str!("codec.rs").as_bytes();
    assert_eq!(compress(text, "rs"), compress(text, "rs"));
}

#[test]
fn test_parallel_calls_agree() {
    let text = include_str!("dictionary.rs").as_bytes();
    let expected = compress(text, "rs");
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| compress(text, "rs"))).collect();
        for h in handles {
            let out = h.join().unwrap();
            assert_eq!(out, expected);
            assert_eq!(expand(&out), text.to_vec());
        }
    });
}

#[test]
fn test_source_files_roundtrip() {
    for (text, tag) in [
        (include_str!("expand.rs"), "rs"),
        (include_str!("header.rs"), "rs"),
        (include_str!("tests.rs"), "rs"),
    ] {
        assert_eq!(roundtrip(text.as_bytes(), tag), text.as_bytes().to_vec());
    }
}

// ========== Randomized round-trip ==========

fn random_text(rng: &mut StdRng, pieces: &[&[u8]]) -> Vec<u8> {
    let len = rng.gen_range(0..200);
    let mut text = Vec::new();
    for _ in 0..len {
        if rng.gen_bool(0.2) {
            text.push(rng.gen::<u8>());
        } else {
            text.extend_from_slice(pieces[rng.gen_range(0..pieces.len())]);
        }
    }
    text
}

#[test]
fn test_random_bytes_roundtrip() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let len = rng.gen_range(0..512);
        let text: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        for tag in ["", "py", "rs"] {
            assert_eq!(roundtrip(&text, tag), text);
        }
    }
}

#[test]
fn test_random_token_lookalikes_roundtrip() {
    let pieces: &[&[u8]] = &[
        b"~", b"~~", b"^", b"*", b"~^", b"~*", b"~0", b"~^a", b"~*62", b"\n", b" ", b"_",
        b"self", b"return", b"function", b"zqbbx", b"value", b"62", b"{\"v\":\"1.2\"}",
    ];
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let text = random_text(&mut rng, pieces);
        for tag in ["", "py", "js", "sh", "nope"] {
            assert_eq!(roundtrip(&text, tag), text, "tag {tag:?}");
        }
    }
}

#[test]
fn test_random_short_words_roundtrip() {
    let pieces: &[&[u8]] = &[b"a", b"b", b"if", b"as", b"~", b"~a", b" ", b"0", b"~^"];
    let mut rng = StdRng::seed_from_u64(99);
    for min_len in [1, 2, 3] {
        let codec = Codec::new(CodecConfig::default().with_min_word_length(min_len));
        for _ in 0..200 {
            let text = random_text(&mut rng, pieces);
            assert_eq!(codec.expand(&codec.compress(&text, "py")), text);
        }
    }
}

// ========== Analysis ==========

#[test]
fn test_analyze_empty() {
    let a = analyze(b"");
    assert_eq!(a.kind, ContentKind::Empty);
    assert_eq!(a.recommendation(), Recommendation::Pass);
}

#[test]
fn test_analyze_null_bytes() {
    assert_eq!(analyze(b"abc\0def").kind, ContentKind::Binary);
}

#[test]
fn test_analyze_high_entropy() {
    let data: Vec<u8> = (0..16).flat_map(|_| 1..=255u8).collect();
    assert_eq!(analyze(&data).kind, ContentKind::HighEntropy);
}

#[test]
fn test_analyze_dense_printable() {
    let data: Vec<u8> = (0..40).flat_map(|_| 33..=126u8).collect();
    assert_eq!(analyze(&data).kind, ContentKind::BinaryLikely);
}

#[test]
fn test_analyze_source_text() {
    let a = analyze(include_str!("analysis.rs").as_bytes());
    assert_eq!(a.kind, ContentKind::Text);
    assert_eq!(a.recommendation(), Recommendation::Compress);
}

#[test]
fn test_entropy_and_whitespace() {
    assert_eq!(shannon_entropy(b"aaaa"), 0.0);
    assert!((shannon_entropy(b"ab") - 1.0).abs() < 1e-9);
    assert!((whitespace_ratio(b"a b ") - 0.5).abs() < 1e-9);
    assert_eq!(whitespace_ratio(b""), 0.0);
}
