use rand::{rngs::OsRng, Rng};

const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Converts a dotted identifier into a valid endpoint name.
pub fn endpoint_name(identifier: &str) -> String {
    identifier.replace('.', "_")
}

/// Converts a dotted identifier into a valid endpoint name and appends
/// `randomize` random characters (upper case and digits), separated by a
/// pipe character.
///
/// The suffix is drawn from the operating-system entropy source so that
/// two registrations of the same identifier do not silently collide.
pub fn unique_endpoint_name(identifier: &str, randomize: usize) -> String {
    let mut rng = OsRng;

    let suffix: String = (0..randomize)
        .map(|_| {
            let idx = rng.gen_range(0..SUFFIX_CHARSET.len());
            SUFFIX_CHARSET[idx] as char
        })
        .collect();

    format!("{}|{}", endpoint_name(identifier), suffix)
}
