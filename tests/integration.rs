// SPDX-License-Identifier: MPL-2.0
use token_lens::config::{self, Config, DEFAULT_IPFS_GATEWAY};
use token_lens::i18n::fluent::I18n;
use token_lens::token::{self, ipfs, Content, ImageOrigin, Token};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ipfs_gateway: Some(DEFAULT_IPFS_GATEWAY.to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ipfs_gateway: Some(DEFAULT_IPFS_GATEWAY.to_string()),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_file_token_resolves_to_text_preview() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "line one\nline two").expect("Failed to write file");

    let token = Token::from_file(&path).expect("Failed to build token from file");
    match token::resolve(&token) {
        Content::Text { text } => assert_eq!(text, "line one\nline two"),
        other => panic!("expected text content, got {other:?}"),
    }
}

#[test]
fn test_file_token_resolves_to_inline_image() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("pixel.png");
    // Content is never sniffed; only the filename drives the MIME type.
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).expect("Failed to write file");

    let token = Token::from_file(&path).expect("Failed to build token from file");
    let content = token::resolve(&token);
    match &content {
        Content::InlineImage { mime, .. } => assert_eq!(mime, "image/png"),
        other => panic!("expected inline image content, got {other:?}"),
    }
    let uri = content.data_uri().expect("inline image should have a data URI");
    assert!(uri.starts_with("data:image/png;base64,"));
}

#[test]
fn test_gateway_rewrite_respects_configured_gateway() {
    let config = Config {
        language: None,
        ipfs_gateway: Some("https://dweb.link".to_string()),
    };
    let url = ipfs::gateway_url("ipfs://bafybeibadcafe/art.png", config.gateway())
        .expect("Failed to rewrite content-addressed source");
    assert_eq!(url, "https://dweb.link/ipfs/bafybeibadcafe/art.png");
}

#[test]
fn test_remote_image_source_never_degrades_to_link() {
    let token = Token {
        source: Some("ipfs://bafybeibadcafe/art.png".to_string()),
        bytes: Some(vec![1, 2, 3]),
        filename: Some("art.png".to_string()),
    };
    assert!(matches!(
        token::resolve(&token),
        Content::RemoteImage {
            origin: ImageOrigin::ContentAddressed,
            ..
        }
    ));
}
