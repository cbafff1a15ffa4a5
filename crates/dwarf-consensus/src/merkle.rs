use crate::hash::sha256d;

/// Merkle root over transaction ids.
///
/// An odd level duplicates its last element before pairing. An empty list
/// yields the all-zero hash.
pub fn merkle_root_txids(txids: &[[u8; 32]]) -> [u8; 32] {
    if txids.is_empty() {
        return [0u8; 32];
    }

    let mut level: Vec<[u8; 32]> = txids.to_vec();
    let mut node_preimage = [0u8; 64];
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        let mut next: Vec<[u8; 32]> = Vec::with_capacity(level.len() / 2);
        for pair in level.chunks_exact(2) {
            node_preimage[..32].copy_from_slice(&pair[0]);
            node_preimage[32..].copy_from_slice(&pair[1]);
            next.push(sha256d(&node_preimage));
        }
        level = next;
    }

    level[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merkle_single_is_identity() {
        let id = [0x42u8; 32];
        assert_eq!(merkle_root_txids(&[id]), id);
    }

    #[test]
    fn merkle_odd_duplicates_last() {
        let a = [0x01u8; 32];
        let b = [0x02u8; 32];
        let c = [0x03u8; 32];
        assert_eq!(
            merkle_root_txids(&[a, b, c]),
            merkle_root_txids(&[a, b, c, c])
        );
    }

    #[test]
    fn merkle_pair_is_sha256d_of_concat() {
        let a = [0x0au8; 32];
        let b = [0x0bu8; 32];
        let mut pre = Vec::with_capacity(64);
        pre.extend_from_slice(&a);
        pre.extend_from_slice(&b);
        assert_eq!(merkle_root_txids(&[a, b]), sha256d(&pre));
    }

    #[test]
    fn merkle_empty_is_zero() {
        assert_eq!(merkle_root_txids(&[]), [0u8; 32]);
    }
}
