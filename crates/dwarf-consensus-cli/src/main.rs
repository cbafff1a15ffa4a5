use dwarf_consensus::{
    create_genesis_block, hash_to_display_hex, read_compact_size_bytes, read_varint_bytes,
    AssetType, ConsensusError, ConsensusParams, TaggedScript,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    script_hex: String,

    #[serde(default)]
    asset: String,

    #[serde(default)]
    encoded_hex: String,

    #[serde(default)]
    time: u32,

    #[serde(default)]
    nonce: u32,

    #[serde(default)]
    bits: u32,

    #[serde(default)]
    version: i32,

    #[serde(default)]
    reward: i64,

    #[serde(default)]
    height: u32,
}

#[derive(Default, Serialize)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    encoded_hex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    script_hex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    asset: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    consumed: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    block_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    merkle_root: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    block_hex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    reward: Option<i64>,
}

impl Response {
    fn fail(err: impl Into<String>) -> Self {
        Self {
            ok: false,
            err: Some(err.into()),
            ..Self::default()
        }
    }

    fn consensus_err(e: ConsensusError) -> Self {
        Self::fail(e.code.as_str())
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>, Response> {
    hex::decode(s).map_err(|_| Response::fail("bad hex"))
}

fn op_tagged_script_encode(req: &Request) -> Result<Response, Response> {
    let payload = decode_hex(&req.script_hex)?;
    let asset = if req.asset.is_empty() {
        AssetType::Mith
    } else {
        req.asset.parse::<AssetType>().map_err(Response::fail)?
    };
    Ok(Response {
        ok: true,
        encoded_hex: Some(hex::encode(TaggedScript::new(payload, asset).encode())),
        ..Response::default()
    })
}

fn op_tagged_script_decode(req: &Request) -> Result<Response, Response> {
    let bytes = decode_hex(&req.encoded_hex)?;
    let script = TaggedScript::decode(&bytes).map_err(Response::consensus_err)?;
    Ok(Response {
        ok: true,
        script_hex: Some(hex::encode(&script.payload)),
        asset: Some(script.asset.code()),
        ..Response::default()
    })
}

fn op_compactsize(req: &Request) -> Result<Response, Response> {
    let bytes = decode_hex(&req.encoded_hex)?;
    let (value, consumed) = read_compact_size_bytes(&bytes).map_err(Response::consensus_err)?;
    Ok(Response {
        ok: true,
        value: Some(value),
        consumed: Some(consumed),
        ..Response::default()
    })
}

fn op_varint(req: &Request) -> Result<Response, Response> {
    let bytes = decode_hex(&req.encoded_hex)?;
    let (value, consumed) = read_varint_bytes(&bytes).map_err(Response::consensus_err)?;
    Ok(Response {
        ok: true,
        value: Some(value),
        consumed: Some(consumed),
        ..Response::default()
    })
}

fn op_genesis_block(req: &Request) -> Result<Response, Response> {
    let block = create_genesis_block(req.time, req.nonce, req.bits, req.version, req.reward);
    Ok(Response {
        ok: true,
        block_hash: Some(hash_to_display_hex(&block.hash())),
        merkle_root: Some(hash_to_display_hex(&block.header.merkle_root)),
        block_hex: Some(hex::encode(block.serialize())),
        ..Response::default()
    })
}

fn op_block_reward(req: &Request) -> Result<Response, Response> {
    Ok(Response {
        ok: true,
        reward: Some(ConsensusParams::default().block_reward(req.height)),
        ..Response::default()
    })
}

fn main() {
    let resp = match serde_json::from_reader::<_, Request>(std::io::stdin()) {
        Err(e) => Response::fail(format!("bad request: {e}")),
        Ok(req) => {
            let res = match req.op.as_str() {
                "tagged_script_encode" => op_tagged_script_encode(&req),
                "tagged_script_decode" => op_tagged_script_decode(&req),
                "compactsize" => op_compactsize(&req),
                "varint" => op_varint(&req),
                "genesis_block" => op_genesis_block(&req),
                "block_reward" => op_block_reward(&req),
                _ => Err(Response::fail("unknown op")),
            };
            res.unwrap_or_else(|e| e)
        }
    };
    let _ = serde_json::to_writer(std::io::stdout(), &resp);
}
