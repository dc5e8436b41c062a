//! End-to-end tests for the `build` and `check` commands.
#![allow(clippy::tests_outside_test_module)]

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use prost::Message;
use ruleset::cli::{BuildArgs, CheckArgs, run_build, run_check};
use ruleset::export::geosite::{GeoSiteList, domain::Type};
use ruleset_config::CliOverrides;

fn write_data(dir: &Path) {
    let data = dir.join("data");
    fs::create_dir_all(data.join("region")).unwrap();
    fs::write(
        data.join("google"),
        "google.com\nwww.google.com\ngoogleapis.cn @cn\nfull:ads.google.com @ads\nkeyword:googlevideo\n",
    )
    .unwrap();
    fs::write(data.join("region").join("cn"), "example.cn\nmail.example.cn\n").unwrap();
    fs::write(
        data.join("geolocation-!cn"),
        "include:google\ngithub.com\n",
    )
    .unwrap();
    fs::write(data.join("geolocation-cn"), "include:cn\ninclude:google @cn\n").unwrap();
}

fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("ruleset.toml");
    let config = format!(
        r#"
[data]
dir = "{data}"

[output]
dir = "{out}"
export_lists = ["geolocation-cn", "geolocation-!cn", "netflix"]

[exclude]
"geolocation-!cn" = ["cn", "ads"]

[logging]
level = "warn"
format = "compact"
"#,
        data = dir.join("data").display(),
        out = dir.join("publish").display(),
    );
    fs::write(&path, config).unwrap();
    path
}

#[test]
fn build_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let config = write_config(dir.path());

    run_build(BuildArgs {
        config: Some(config),
        overrides: CliOverrides::default(),
    })
    .unwrap();

    let out = dir.path().join("publish");
    let mut names: Vec<_> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), 12);
    assert!(names.contains(&"gfwlist.txt".to_string()));
    assert!(names.contains(&"geosite.dat".to_string()));
    assert!(!names.iter().any(|n| n.starts_with("netflix")));

    let surge = fs::read_to_string(out.join("geolocation-!cn.list")).unwrap();
    let body = surge.split_once("\n\n").unwrap().1;
    assert_eq!(body, "DOMAIN-SUFFIX,google.com\nDOMAIN-SUFFIX,github.com\n");

    let snippet = fs::read_to_string(out.join("geolocation-cn.snippet")).unwrap();
    let body = snippet.split_once("\n\n").unwrap().1;
    assert_eq!(
        body,
        "host-suffix, example.cn, direct\nhost-suffix, googleapis.cn, direct\n"
    );

    let json: serde_json::Value =
        serde_json::from_slice(&fs::read(out.join("geolocation-!cn.json")).unwrap()).unwrap();
    assert_eq!(json["rules"][0]["domain_suffix"][1], ".github.com");

    let gfwlist = STANDARD
        .decode(fs::read(out.join("gfwlist.txt")).unwrap())
        .unwrap();
    let gfwlist = String::from_utf8(gfwlist).unwrap();
    assert!(gfwlist.starts_with("[AutoProxy 0.2.9]\n"));
    assert!(gfwlist.contains("\n||github.com\n"));
    assert!(gfwlist.ends_with("googlevideo\n"));

    let geosite = GeoSiteList::decode(&*fs::read(out.join("geosite.dat")).unwrap()).unwrap();
    let codes: Vec<_> = geosite.entry.iter().map(|s| s.country_code.as_str()).collect();
    assert_eq!(codes, ["CN", "GEOLOCATION-!CN", "GEOLOCATION-CN", "GOOGLE"]);

    let google = &geosite.entry[3];
    let ads = google.domain.iter().find(|d| d.value == "ads.google.com").unwrap();
    assert_eq!(ads.r#type(), Type::Full);
    assert_eq!(ads.attribute[0].key, "ads");
    assert!(google.domain.iter().any(|d| d.value == "googlevideo" && d.r#type() == Type::Plain));

    let proxied: Vec<_> = geosite.entry[1].domain.iter().map(|d| d.value.as_str()).collect();
    assert!(!proxied.contains(&"googleapis.cn"));
    assert!(!proxied.contains(&"ads.google.com"));
    assert!(proxied.contains(&"github.com"));
}

#[test]
fn overrides_take_precedence() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let config = write_config(dir.path());
    let alt_out = dir.path().join("alt");

    run_build(BuildArgs {
        config: Some(config),
        overrides: CliOverrides {
            output_dir: Some(alt_out.to_string_lossy().into_owned()),
            export_lists: Some(vec!["google".into()]),
            gfwlist: Some(String::new()),
            ..Default::default()
        },
    })
    .unwrap();

    let plain = fs::read_to_string(alt_out.join("google.txt")).unwrap();
    assert!(plain.contains("full:ads.google.com:@ads\n"));
    assert!(!alt_out.join("gfwlist.txt").exists());
    assert!(!dir.path().join("publish").exists());
}

#[test]
fn check_reports_broken_data() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let config = write_config(dir.path());

    run_check(CheckArgs {
        config: Some(config.clone()),
        overrides: CliOverrides::default(),
    })
    .unwrap();

    fs::write(dir.path().join("data").join("loop-a"), "include:loop-b\n").unwrap();
    fs::write(dir.path().join("data").join("loop-b"), "include:loop-a\n").unwrap();
    let err = run_check(CheckArgs {
        config: Some(config),
        overrides: CliOverrides::default(),
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("cyclic inclusion:"));
    assert!(!dir.path().join("publish").exists());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_build(BuildArgs {
        config: Some(dir.path().join("nope.toml")),
        overrides: CliOverrides::default(),
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("io:"));
}
