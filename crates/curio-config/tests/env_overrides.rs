use figment::Jail;
use pretty_assertions::assert_eq;
use curio_config::CurioConfig;

#[test]
fn env_maps_to_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("CURIO_STORAGE__REMOTE_URL", "https://json.example.com");
        jail.set_env("CURIO_GENERAL__NICHE", "woodworking");
        jail.set_env("CURIO_INTEL__RELATED_LIMIT", "4");

        let config: CurioConfig = CurioConfig::figment_in(jail.directory()).extract()?;
        assert_eq!(config.storage.remote_url, "https://json.example.com");
        assert_eq!(config.general.niche, "woodworking");
        assert_eq!(config.intel.related_limit, 4);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".curio")?;
        jail.create_file(
            ".curio/config.toml",
            r#"
            [general]
            channel_id = "UC-from-toml"
            "#,
        )?;
        jail.set_env("CURIO_GENERAL__CHANNEL_ID", "UC-from-env");

        let config: CurioConfig = CurioConfig::figment_in(jail.directory()).extract()?;
        assert_eq!(config.general.channel_id, "UC-from-env");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_retention() {
    Jail::expect_with(|jail| {
        jail.set_env("CURIO_STORAGE__RETENTION", "0");
        assert!(CurioConfig::load().is_err());
        Ok(())
    });
}
