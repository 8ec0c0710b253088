use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

// Shared with the API's auth middleware; the token this prints is pasted into
// an Authorization header by hand.
const JWT_SECRET: &str = "passion-jwt-secret";
const TOKEN_LIFETIME_SECS: u64 = 60 * 60 * 24 * 30;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: u64,
    name: String,
    email: String,
    department: String,
    iat: u64,
    exp: u64,
}

fn admin_claims(now: u64) -> Claims {
    Claims {
        id: 1,
        name: "Super Admin".to_owned(),
        email: "admin@passion.com".to_owned(),
        department: "admin".to_owned(),
        iat: now,
        exp: now + TOKEN_LIFETIME_SECS,
    }
}

fn sign(claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
}

fn main() -> Result<(), jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs();

    let token = sign(&admin_claims(now))?;
    println!("{token}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{DecodingKey, Validation, decode};

    use super::*;

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_secs()
    }

    #[test]
    fn token_has_three_segments() {
        let token = sign(&admin_claims(now())).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn payload_decodes_to_admin_claims() {
        let token = sign(&admin_claims(now())).unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(JWT_SECRET.as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.id, 1);
        assert_eq!(decoded.claims.name, "Super Admin");
        assert_eq!(decoded.claims.email, "admin@passion.com");
        assert_eq!(decoded.claims.department, "admin");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign(&admin_claims(now())).unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"not-the-shared-secret"),
            &Validation::default(),
        );

        assert!(result.is_err());
    }
}
