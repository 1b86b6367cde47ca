use classic_ciphers::{
    Alphabet,
    CipherConfig,
    CipherKind,
    Error,
    IndexMode,
    Key,
    Result,
    RunningKeyCipher,
    ShiftCipher,
    SubstitutionCipher,
};

// ----- Shift Cipher Tests -----

#[test]
fn test_shift_hello() -> Result<()> {
    let cipher = ShiftCipher::new();
    let key = Key::from(3);

    let encrypted = cipher.encrypt("hello", &key, Alphabet::Latin)?;
    assert_eq!(encrypted, "ebiil");
    assert_eq!(cipher.decrypt(&encrypted, &key, Alphabet::Latin)?, "hello");
    Ok(())
}

#[test]
fn test_shift_case_normalization() -> Result<()> {
    let cipher = ShiftCipher::new();
    let key = Key::from(7);

    assert_eq!(
        cipher.encrypt("ABC", &key, Alphabet::Latin)?,
        cipher.encrypt("abc", &key, Alphabet::Latin)?
    );
    assert_eq!(cipher.decrypt(&cipher.encrypt("MiXeD", &key, Alphabet::Latin)?, &key, Alphabet::Latin)?, "mixed");
    Ok(())
}

#[test]
fn test_shift_textual_key_matches_numeric() -> Result<()> {
    let cipher = ShiftCipher::new();

    assert_eq!(
        cipher.encrypt("attack at dawn 1984", &Key::from("11"), Alphabet::Latin)?,
        cipher.encrypt("attack at dawn 1984", &Key::from(11), Alphabet::Latin)?
    );
    Ok(())
}

#[test]
fn test_shift_malformed_key() {
    let cipher = ShiftCipher::new();
    match cipher.encrypt("hello", &Key::from("3a"), Alphabet::Latin) {
        Err(Error::InvalidKey(_)) => {},
        other => panic!("Expected InvalidKey error, got {:?}", other),
    }
}

// ----- Running-Key Cipher Tests -----

#[test]
fn test_running_key_golden() -> Result<()> {
    let cipher = RunningKeyCipher::new();
    let key = Key::from("key");

    let encrypted = cipher.encrypt("hello", &key, Alphabet::Latin)?;
    assert_eq!(encrypted, "xanbk");
    assert_eq!(cipher.decrypt(&encrypted, &key, Alphabet::Latin)?, "hello");
    Ok(())
}

#[test]
fn test_running_key_cycles_over_five_letters() -> Result<()> {
    let cipher = RunningKeyCipher::new();
    let key = Key::from("ab");

    // Each 'a' key position leaves the letter alone, each 'b' moves it back one
    assert_eq!(cipher.encrypt("hello", &key, Alphabet::Latin)?, "hdlko");
    Ok(())
}

#[test]
fn test_running_key_rejects_numeric_key() {
    let cipher = RunningKeyCipher::new();
    assert!(matches!(cipher.decrypt("hello", &Key::from(3), Alphabet::Latin), Err(Error::InvalidKey(_))));
}

// ----- Shared Behavior Tests -----

#[test]
fn test_digit_handling_divergence() -> Result<()> {
    let caesar = ShiftCipher::new();
    let vigenere = RunningKeyCipher::new();

    let shifted = caesar.encrypt("a1b2", &Key::from(3), Alphabet::Latin)?;
    assert_eq!(shifted, "x8y9");

    let keyed = vigenere.encrypt("a1b2", &Key::from("d"), Alphabet::Latin)?;
    assert_eq!(keyed, "x1y2");
    Ok(())
}

#[test]
fn test_pass_through_keeps_positions() -> Result<()> {
    let text = "hi, there! (ok?)";
    let ciphers: Vec<(Box<dyn SubstitutionCipher>, Key)> = vec![
        (Box::new(ShiftCipher::new()), Key::from(5)),
        (Box::new(RunningKeyCipher::new()), Key::from("lemon")),
    ];

    for (cipher, key) in ciphers {
        let encrypted = cipher.encrypt(text, &key, Alphabet::Latin)?;
        assert_eq!(encrypted.chars().count(), text.chars().count());
        for (original, produced) in text.chars().zip(encrypted.chars()) {
            if !original.is_ascii_alphabetic() {
                assert_eq!(original, produced, "{} moved a non-letter", cipher.kind());
            }
        }
    }
    Ok(())
}

#[test]
fn test_trait_objects_from_config() -> Result<()> {
    for kind in [CipherKind::Shift, CipherKind::RunningKey] {
        let cipher = kind.instantiate(IndexMode::Wrapping);
        assert_eq!(cipher.kind(), kind);
    }

    let caesar = CipherConfig::caesar(Alphabet::Cyrillic).build();
    let encrypted = caesar.encrypt("Съешь же ещё", &Key::from(10))?;
    assert_eq!(caesar.decrypt(&encrypted, &Key::from(10))?, "съешь же ещё");
    Ok(())
}

#[test]
fn test_reference_parity_config() -> Result<()> {
    let cipher = CipherConfig::reference_parity(CipherKind::Shift, Alphabet::Latin).build();

    assert_eq!(cipher.encrypt("hello", &Key::from(3))?, "ebiil");
    assert!(matches!(
        cipher.decrypt("xyz", &Key::from(3)),
        Err(Error::IndexOutOfRange { index: 26, len: 26 })
    ));
    Ok(())
}

#[test]
fn test_names_parse_into_config() -> Result<()> {
    let config = CipherConfig::new()
        .with_kind("caesar".parse()?)
        .with_alphabet("rus".parse()?);

    assert_eq!(config, CipherConfig::caesar(Alphabet::Cyrillic));
    assert!(matches!("esperanto".parse::<Alphabet>(), Err(Error::UnknownAlphabet(_))));
    Ok(())
}

#[test]
fn test_ciphers_are_shareable_across_threads() {
    let cipher = std::sync::Arc::new(CipherConfig::vigenere(Alphabet::Latin).build());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cipher = cipher.clone();
            std::thread::spawn(move || cipher.encrypt("hello", &Key::from("key")).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "xanbk");
    }
}
