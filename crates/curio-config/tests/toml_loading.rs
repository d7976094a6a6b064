use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use curio_config::CurioConfig;

#[test]
fn toml_file_populates_sections() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
            [storage]
            remote_url = "https://json.example.com"
            collection_id = "col-7"
            retention = 5

            [general]
            channel_id = "UC-cooking"
            niche = "home cooking"
            "#,
        )?;

        let config: CurioConfig = Figment::from(Serialized::defaults(CurioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.storage.is_configured());
        assert_eq!(config.storage.collection_override(), Some("col-7"));
        assert_eq!(config.storage.retention, 5);
        assert_eq!(config.general.niche, "home cooking");
        // Untouched fields keep their defaults.
        assert_eq!(config.storage.data_dir, ".curio/store");
        assert_eq!(config.intel.related_limit, 8);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_from_curio_dir() {
    Jail::expect_with(|jail| {
        jail.create_dir(".curio")?;
        jail.create_file(
            ".curio/config.toml",
            r#"
            [generation]
            endpoint = "http://localhost:8080/generate"
            temperature = 0.5
            "#,
        )?;

        let config: CurioConfig = CurioConfig::figment_in(jail.directory()).extract()?;
        assert!(config.generation.is_configured());
        assert!((config.generation.temperature - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.generation.max_new_tokens, 140);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
            [intel]
            timeout_secs = 3
            "#,
        )?;

        let config: CurioConfig = Figment::from(Serialized::defaults(CurioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.intel.timeout_secs, 3);
        assert_eq!(config.intel.datamuse_url, "https://api.datamuse.com");
        assert!(!config.storage.is_configured());
        Ok(())
    });
}
