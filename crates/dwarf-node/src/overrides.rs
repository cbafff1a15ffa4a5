//! Translate operator arguments into test-network option sets.
//!
//! Every reader validates its whole input before anything is returned: one
//! malformed entry fails the call and nothing is partially applied.

use std::collections::BTreeMap;

use dwarf_consensus::{BuriedDeployment, DeploymentPos};
use tracing::info;

use crate::args::{has_test_option, ArgSource};
use crate::error::{ChainParamsError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SigNetOptions {
    pub challenge: Option<Vec<u8>>,
    pub seeds: Option<Vec<String>>,
}

/// A `-vbparams` override for one deployment slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VersionBitsParameters {
    pub start_time: i64,
    pub timeout: i64,
    pub min_activation_height: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegTestOptions {
    /// Later `-vbparams` entries for the same deployment replace earlier ones.
    pub version_bits_parameters: BTreeMap<DeploymentPos, VersionBitsParameters>,
    /// Later `-testactivationheight` entries for the same name replace earlier ones.
    pub activation_heights: BTreeMap<BuriedDeployment, i32>,
    pub fastprune: bool,
    pub enforce_bip94: bool,
}

pub fn read_signet_args(args: &dyn ArgSource) -> Result<SigNetOptions> {
    let mut options = SigNetOptions::default();

    let seeds = args.get_args("-signetseednode");
    if !seeds.is_empty() {
        options.seeds = Some(seeds);
    }

    let challenge = args.get_args("-signetchallenge");
    match challenge.as_slice() {
        [] => {}
        [one] => {
            let bytes = hex::decode(one)
                .map_err(|_| ChainParamsError::SignetChallengeNotHex(one.clone()))?;
            options.challenge = Some(bytes);
        }
        _ => return Err(ChainParamsError::SignetChallengeMultiple),
    }

    Ok(options)
}

/// Parses one `name@height` value.
pub fn parse_test_activation_height(arg: &str) -> Result<(BuriedDeployment, i32)> {
    let Some((name, value)) = arg.rsplit_once('@') else {
        return Err(ChainParamsError::ActivationHeightFormat(arg.to_string()));
    };

    let height = match value.parse::<i32>() {
        Ok(h) if (0..i32::MAX).contains(&h) => h,
        _ => return Err(ChainParamsError::ActivationHeightValue(arg.to_string())),
    };

    let dep = BuriedDeployment::from_name(name)
        .ok_or_else(|| ChainParamsError::ActivationHeightName(arg.to_string()))?;
    Ok((dep, height))
}

/// Parses one `deployment:start:end[:min_activation_height]` value.
pub fn parse_vbparams(arg: &str) -> Result<(DeploymentPos, VersionBitsParameters)> {
    let fields: Vec<&str> = arg.split(':').collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(ChainParamsError::VbParamsMalformed(arg.to_string()));
    }

    let start_time = fields[1]
        .parse::<i64>()
        .map_err(|_| ChainParamsError::VbParamsStartTime(fields[1].to_string()))?;
    let timeout = fields[2]
        .parse::<i64>()
        .map_err(|_| ChainParamsError::VbParamsTimeout(fields[2].to_string()))?;
    let min_activation_height = match fields.get(3) {
        Some(f) => match f.parse::<i32>() {
            Ok(h) if h >= 0 => h,
            _ => return Err(ChainParamsError::VbParamsMinActivationHeight(f.to_string())),
        },
        None => 0,
    };

    let pos = DeploymentPos::from_name(fields[0])
        .ok_or_else(|| ChainParamsError::VbParamsDeployment(fields[0].to_string()))?;

    Ok((
        pos,
        VersionBitsParameters {
            start_time,
            timeout,
            min_activation_height,
        },
    ))
}

pub fn read_regtest_args(args: &dyn ArgSource) -> Result<RegTestOptions> {
    let mut options = RegTestOptions::default();

    if let Some(v) = args.get_bool_arg("-fastprune") {
        options.fastprune = v;
    }
    if has_test_option(args, "bip94") {
        options.enforce_bip94 = true;
    }

    for arg in args.get_args("-testactivationheight") {
        let (dep, height) = parse_test_activation_height(&arg)?;
        options.activation_heights.insert(dep, height);
    }

    for arg in args.get_args("-vbparams") {
        let (pos, vb) = parse_vbparams(&arg)?;
        options.version_bits_parameters.insert(pos, vb);
        info!(
            deployment = pos.name(),
            start = vb.start_time,
            timeout = vb.timeout,
            min_activation_height = vb.min_activation_height,
            "Setting version bits activation parameters"
        );
    }

    Ok(options)
}
