use std::process::Command;

fn node(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_dwarf-node"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run dwarf-node")
}

#[test]
fn params_prints_json() {
    let out = node(&["params", "-chain=regtest", "-vbparams=ringburn:100:200:5"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["network_id"], "regtest");
    let deployments = v["consensus"]["deployments"].as_array().expect("array");
    assert_eq!(deployments[2]["name"], "ringburn");
    assert_eq!(deployments[2]["start_time"], 100);
    assert_eq!(deployments[2]["min_activation_height"], 5);
}

#[test]
fn invalid_override_exits_with_one() {
    let out = node(&["params", "-chain=regtest", "-testactivationheight=segwit"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Invalid format (segwit) for -testactivationheight=name@height."));
}

#[test]
fn reward_and_scripts() {
    let out = node(&["reward", "--height", "0"]);
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "12800000000");

    let out = node(&["script-encode", "--script-hex", "51", "--asset", "ring"]);
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "015101");

    let out = node(&["script-decode", "--encoded-hex", "015101"]);
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("script 51"));
    assert!(text.contains("asset ring"));
}

#[test]
fn usage_errors_exit_with_two() {
    assert_eq!(node(&[]).status.code(), Some(2));
    assert_eq!(node(&["bogus"]).status.code(), Some(2));
    assert_eq!(node(&["reward"]).status.code(), Some(2));
}
