use super::*;

#[test]
fn program_parse_case_insensitive() {
    assert_eq!("fiesta".parse::<Program>(), Ok(Program::Fiesta));
    assert_eq!(" Lapis_Pub ".parse::<Program>(), Ok(Program::LapisPub));
    assert!("PARQUE".parse::<Program>().is_err());
}

#[test]
fn program_ids_round_trip() {
    for program in Program::ALL {
        assert_eq!(program.id().parse::<Program>(), Ok(program));
        assert!(!program.label().is_empty());
    }
}

#[test]
fn program_serializes_as_id() {
    assert_eq!(
        serde_json::to_string(&Program::SaludDigna).unwrap(),
        "\"SALUD_DIGNA\""
    );
    assert_eq!(serde_json::to_string(&Program::PmCamp).unwrap(), "\"PM_CAMP\"");
}

#[test]
fn resolve_falls_back_to_otro() {
    assert_eq!(Program::resolve(Some("BACKING")), Program::Backing);
    assert_eq!(Program::resolve(Some("unknown")), Program::Otro);
    assert_eq!(Program::resolve(None), Program::Otro);
}

#[test]
fn builtin_catalog_covers_every_program() {
    let catalog = Catalog::builtin();
    for program in Program::ALL {
        let config = catalog.config(program);
        assert_eq!(config, &builtin_config(program), "{program}");
        assert_eq!(config.section_weights.len(), 4);
    }
}

#[test]
fn builtin_overrides() {
    let lapis_pub = builtin_config(Program::LapisPub);
    let overrides: Vec<(String, f64)> = lapis_pub
        .overrides()
        .map(|(id, w)| (id.to_string(), w))
        .collect();
    assert_eq!(
        overrides,
        vec![
            ("A1.2".to_string(), 0.0),
            ("A1.5".to_string(), 0.0),
            ("A2.1".to_string(), 0.7),
            ("A2.3".to_string(), 0.7),
            ("A2.6".to_string(), 1.5),
            ("A3.3".to_string(), 1.5),
            ("A4.4".to_string(), 0.3),
        ]
    );
    assert_eq!(builtin_config(Program::Otro).overrides().count(), 0);
    assert_eq!(builtin_config(Program::PmCamp).overrides().count(), 0);
    assert_eq!(
        builtin_config(Program::MenuDia),
        builtin_config(Program::Backing)
    );
    assert_eq!(
        builtin_config(Program::CanchasPm),
        builtin_config(Program::PintaCancha)
    );
}

#[test]
fn with_override_leaves_other_programs_alone() {
    let changed = Catalog::builtin().with_override(
        Program::Fiesta,
        ProgramConfig::new(&[("A1.1".parse().unwrap(), 9.0)], common_section_weights()),
    );
    assert_eq!(changed.config(Program::Otro), &builtin_config(Program::Otro));
    assert_ne!(changed.config(Program::Fiesta), &builtin_config(Program::Fiesta));
}

#[test]
fn from_toml_indicator_override_keeps_sections() {
    let catalog = Catalog::from_toml_str(
        r#"
[programs.FIESTA.indicator_weights.A2]
"A2.1" = 0.2
"#,
    )
    .unwrap();
    let fiesta = catalog.config(Program::Fiesta);
    let overrides: Vec<(IndicatorId, f64)> = fiesta.overrides().collect();
    assert_eq!(overrides, vec![("A2.1".parse().unwrap(), 0.2)]);
    assert_eq!(fiesta.section_weights, common_section_weights());
    assert_eq!(catalog.config(Program::She), &builtin_config(Program::She));
}

#[test]
fn from_toml_section_weights_merge_over_common() {
    let catalog = Catalog::from_toml_str(
        r#"
[common_section_weights]
Encuentro = 0.4

[programs.SHE.section_weights]
Usos = 0.0
"#,
    )
    .unwrap();
    let otro = catalog.config(Program::Otro);
    assert_eq!(otro.section_weights[&AttributeGroup::Encuentro], 0.4);
    assert_eq!(otro.section_weights[&AttributeGroup::Usos], 0.25);

    let she = catalog.config(Program::She);
    assert_eq!(she.section_weights[&AttributeGroup::Encuentro], 0.4);
    assert_eq!(she.section_weights[&AttributeGroup::Usos], 0.0);
    // indicator overrides untouched
    assert_eq!(she.indicator_weights, builtin_config(Program::She).indicator_weights);
}

#[test]
fn from_toml_rejects_invalid_catalog() {
    let err = Catalog::from_toml_str(
        r#"
[programs.PARQUE.section_weights]
Usos = 1.0
"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidCatalog(ref errors) if errors.len() == 1), "{err}");
}

#[test]
fn from_toml_rejects_unknown_fields() {
    let err = Catalog::from_toml_str("[programs.FIESTA]\nweights = 1\n").unwrap_err();
    assert!(matches!(err, Error::Toml(_)), "{err}");
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "[programs.otro.section_weights]\nUsos = 1.0\n").unwrap();
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(
        catalog.config(Program::Otro).section_weights[&AttributeGroup::Usos],
        1.0
    );
}

#[test]
fn load_missing_file_names_path() {
    let err = Catalog::load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/catalog.toml"), "{err}");
}

#[test]
fn check_catalog_counts_programs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        "[programs.SHE.section_weights]\nUsos = 0.5\n\n[programs.FIESTA.indicator_weights.A2]\n\"A2.1\" = 0.5\n",
    )
    .unwrap();
    let file = check_catalog(&path).unwrap();
    assert_eq!(file.overridden(), 2);
    assert!(run_check(&path).is_ok());
}

#[test]
fn check_catalog_reports_every_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        "[programs.PARQUE.section_weights]\nUsos = 1.0\n\n[programs.FIESTA.section_weights]\nVerde = -1.0\n",
    )
    .unwrap();
    let Err(Error::InvalidCatalog(errors)) = check_catalog(&path) else {
        panic!("expected an invalid catalog");
    };
    assert!(errors.len() >= 2, "{errors:?}");
    assert!(errors.iter().any(|e| e.starts_with("programs.PARQUE")), "{errors:?}");
}

#[test]
fn run_list_table_and_json() {
    assert!(run_list(None, false).is_ok());
    assert!(run_list(None, true).is_ok());
}
