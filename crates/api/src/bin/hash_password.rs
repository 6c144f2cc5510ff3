//! Print an `ADMIN_PASSWORD_HASH` value for a new admin password.
//!
//! ```text
//! showreel-hash-password 'my new password'
//! ```

use anyhow::bail;

use showreel_api::auth::password::{check_new_password, hash_password, verify_password};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(password) = args.next() else {
        bail!("usage: showreel-hash-password <password>");
    };
    if args.next().is_some() {
        bail!("expected exactly one argument; quote passwords that contain spaces");
    }

    check_new_password(&password)?;

    let hash = hash_password(&password).map_err(|e| anyhow::anyhow!("hashing failed: {e}"))?;
    let verified = verify_password(&password, &hash)
        .map_err(|e| anyhow::anyhow!("freshly generated hash could not be parsed: {e}"))?;
    if !verified {
        bail!("freshly generated hash did not verify");
    }

    // Single quotes keep dotenv from expanding the `$` separators.
    println!("ADMIN_PASSWORD_HASH='{hash}'");
    Ok(())
}
