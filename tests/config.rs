use floragen::config::{AppConfig, ConfigManager, GeneticsConfig};
use floragen::config::traits::ConfigSection;

#[test]
fn test_default_config_is_valid() {
    let config = GeneticsConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.vocabulary, "ABCDEFGHIJK");
    assert_eq!(config.genome_length, 3);
    assert_eq!(config.mutation_rate, 0.3);
}

#[test]
fn test_validation_bounds() {
    let mut config = GeneticsConfig::default();

    config.mutation_rate = 1.5;
    assert!(config.validate().is_err());

    config = GeneticsConfig::default();
    config.genome_length = 0;
    assert!(config.validate().is_err());

    config = GeneticsConfig::default();
    config.vocabulary = "ABA".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_update_rejects_invalid_state() {
    let manager = ConfigManager::new();
    assert!(manager
        .update(|config| config.genetics.mutation_rate = 2.0)
        .is_err());
}

#[test]
fn test_toml_round_trip() {
    let path = std::env::temp_dir().join("floragen_config_round_trip.toml");

    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.genetics.vocabulary = "ABCDE".to_string();
            config.genetics.genome_length = 5;
            config.genetics.mutation_rate = 0.1;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let restored = ConfigManager::new();
    restored.load_from_file(&path).unwrap();
    let config: AppConfig = restored.get();
    assert_eq!(config.genetics.vocabulary, "ABCDE");
    assert_eq!(config.genetics.genome_length, 5);
    assert_eq!(config.genetics.mutation_rate, 0.1);

    let _ = std::fs::remove_file(&path);
}
