use dwarf_node::{
    create_base_chain_params, create_chain_params, ArgsManager, ChainParamsError, ChainType,
};

#[test]
fn every_chain_type_builds() {
    let args = ArgsManager::new();
    for chain in ChainType::ALL {
        let p = create_chain_params(&args, chain).expect("default args are valid");
        assert_eq!(p.chain_type(), chain);
        assert_eq!(p.is_test_chain(), chain != ChainType::Main);
        let base = create_base_chain_params(chain);
        assert_ne!(base.rpc_port, p.default_port());
    }
}

#[test]
fn chain_names_round_trip() {
    for chain in ChainType::ALL {
        assert_eq!(chain.as_str().parse::<ChainType>(), Ok(chain));
    }
    assert_eq!(
        "mainnet".parse::<ChainType>(),
        Err(ChainParamsError::UnknownChain("mainnet".to_string()))
    );
}

#[test]
fn operator_errors_render_the_offending_value() {
    let args = ArgsManager::new().with("-testactivationheight", "segwit@abc");
    let err = create_chain_params(&args, ChainType::Regtest).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid height value (segwit@abc) for -testactivationheight=name@height."
    );

    let args = ArgsManager::new().with("-vbparams", "bogus:1:2");
    let err = create_chain_params(&args, ChainType::Regtest).unwrap_err();
    assert_eq!(err.to_string(), "Invalid deployment (bogus)");
}

#[test]
fn conflicting_chain_flags_are_rejected() {
    let (args, _) = ArgsManager::from_tokens(["-regtest", "-chain=signet"]);
    assert!(matches!(
        dwarf_node::chain_type_from_args(&args),
        Err(ChainParamsError::ConflictingChains)
    ));
}
