//! Names of well-known object identifiers.
//!
//! This is a small hardcoded table of object identifiers commonly found in
//! certificates, signatures, and CMS messages. It is used to annotate
//! disassembled object identifiers and makes no attempt at completeness.

use super::{ConstOid, Oid};


/// Well-known object identifiers and their names.
///
/// The object identifiers are given as encoded content octets.
static NAMES: &[(ConstOid, &str)] = &[
    // PKCS #1
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 1]), "rsaEncryption"),
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 5]), "sha1WithRSAEncryption"),
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 10]), "rsassa-pss"),
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 11]), "sha256WithRSAEncryption"),
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 12]), "sha384WithRSAEncryption"),
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 13]), "sha512WithRSAEncryption"),

    // PKCS #7 content types
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 7, 1]), "data"),
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 7, 2]), "signedData"),

    // PKCS #9 attributes
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 1]), "emailAddress"),
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 3]), "contentType"),
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 4]), "messageDigest"),
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 5]), "signingTime"),

    // Elliptic curves
    (Oid(&[42, 134, 72, 206, 61, 2, 1]), "id-ecPublicKey"),
    (Oid(&[42, 134, 72, 206, 61, 3, 1, 7]), "prime256v1"),
    (Oid(&[43, 129, 4, 0, 34]), "secp384r1"),
    (Oid(&[43, 129, 4, 0, 35]), "secp521r1"),
    (Oid(&[42, 134, 72, 206, 61, 4, 3, 2]), "ecdsa-with-SHA256"),
    (Oid(&[42, 134, 72, 206, 61, 4, 3, 3]), "ecdsa-with-SHA384"),
    (Oid(&[42, 134, 72, 206, 61, 4, 3, 4]), "ecdsa-with-SHA512"),
    (Oid(&[43, 101, 110]), "X25519"),
    (Oid(&[43, 101, 112]), "ED25519"),

    // Hash functions
    (Oid(&[43, 14, 3, 2, 26]), "sha1"),
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 2, 1]), "sha256"),
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 2, 2]), "sha384"),
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 2, 3]), "sha512"),

    // X.520 attribute types
    (Oid(&[85, 4, 3]), "commonName"),
    (Oid(&[85, 4, 5]), "serialNumber"),
    (Oid(&[85, 4, 6]), "countryName"),
    (Oid(&[85, 4, 7]), "localityName"),
    (Oid(&[85, 4, 8]), "stateOrProvinceName"),
    (Oid(&[85, 4, 10]), "organizationName"),
    (Oid(&[85, 4, 11]), "organizationalUnitName"),

    // X.509v3 certificate extensions
    (Oid(&[85, 29, 14]), "subjectKeyIdentifier"),
    (Oid(&[85, 29, 15]), "keyUsage"),
    (Oid(&[85, 29, 17]), "subjectAltName"),
    (Oid(&[85, 29, 19]), "basicConstraints"),
    (Oid(&[85, 29, 31]), "crlDistributionPoints"),
    (Oid(&[85, 29, 32]), "certificatePolicies"),
    (Oid(&[85, 29, 35]), "authorityKeyIdentifier"),
    (Oid(&[85, 29, 37]), "extKeyUsage"),

    // PKIX
    (Oid(&[43, 6, 1, 5, 5, 7, 1, 1]), "authorityInfoAccess"),
    (Oid(&[43, 6, 1, 5, 5, 7, 3, 1]), "serverAuth"),
    (Oid(&[43, 6, 1, 5, 5, 7, 3, 2]), "clientAuth"),
    (Oid(&[43, 6, 1, 5, 5, 7, 48, 1]), "ocsp"),
    (Oid(&[43, 6, 1, 5, 5, 7, 48, 2]), "caIssuers"),
    (Oid(&[43, 6, 1, 4, 1, 214, 121, 2, 4, 2]), "ct_precert_scts"),
];


/// Looks up the name of the object identifier with the given content.
///
/// Returns `None` if the object identifier is not in the well-known table.
pub fn lookup(content: &[u8]) -> Option<&'static str> {
    NAMES.iter()
        .find(|(oid, _)| oid.as_ref() == content)
        .map(|(_, name)| *name)
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup_names() {
        assert_eq!(
            lookup(b"\x2a\x86\x48\x86\xf7\x0d\x01\x01\x0b"),
            Some("sha256WithRSAEncryption")
        );
        assert_eq!(
            lookup(b"\x60\x86\x48\x01\x65\x03\x04\x02\x01"), Some("sha256")
        );
        assert_eq!(lookup(b"\x2b\x06\x01"), None);
        assert_eq!(lookup(b""), None);
    }

    #[test]
    fn table_is_well_formed() {
        for (oid, name) in NAMES {
            assert!(oid.arcs().is_ok(), "malformed entry for {name}");
            assert_eq!(
                NAMES.iter().filter(|(other, _)| other == oid).count(), 1,
                "duplicate entry for {name}"
            );
        }
    }
}
