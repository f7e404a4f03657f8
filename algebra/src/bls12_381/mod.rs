use crate::prelude::*;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// The number of bytes for a scalar value over BLS12-381
pub const BLS12_381_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod fq;
pub use fq::*;

mod g1;
pub use g1::*;

mod g2;
pub use g2::*;

mod gt;
pub use gt::*;

mod pairing;
pub use pairing::*;

pub(crate) fn to_compressed<T: CanonicalSerialize>(value: &T) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.compressed_size());
    // writing into a Vec cannot fail
    let _ = value.serialize_compressed(&mut buf);
    buf
}

pub(crate) fn from_compressed<T: CanonicalDeserialize>(bytes: &[u8]) -> Result<T> {
    T::deserialize_compressed(bytes).map_err(|_| AlgebraError::DeserializationError)
}

#[cfg(test)]
mod bls12_381_groups_test {
    use crate::{
        bls12_381::{BLSFq, BLSGt, BLSPairingEngine, BLSScalar, BLSG1, BLSG2},
        prelude::*,
        traits::group_tests::{
            run_multiexp_test, test_group_serialization, test_scalar_operations,
            test_scalar_serialization, test_signed_embedding,
        },
    };
    use ark_std::str::FromStr;

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BLSScalar>();
        test_signed_embedding::<BLSScalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BLSScalar>();
    }

    #[test]
    fn scalar_decimal_strings() {
        let x = BLSScalar::from_str("155").unwrap();
        assert_eq!(x, BLSScalar::from(155u32));
        assert_eq!(x.to_string(), "155");

        let minus_one = BLSScalar::from_i64(-1);
        let parsed = BLSScalar::from_str(&minus_one.to_string()).unwrap();
        assert_eq!(parsed, minus_one);

        let modulus = BLSScalar::get_field_size_biguint().to_string();
        assert!(BLSScalar::from_str(&modulus).is_err());
        assert!(BLSScalar::from_str("-5").is_err());
    }

    #[test]
    fn multiexp() {
        run_multiexp_test::<BLSG1>();
        run_multiexp_test::<BLSG2>();
        run_multiexp_test::<BLSGt>();
    }

    #[test]
    fn group_deser() {
        test_group_serialization::<BLSG1>();
        test_group_serialization::<BLSG2>();
    }

    #[test]
    fn hard_coded_group_elements() {
        let base_gt = BLSGt::get_base();
        let expected_base = BLSPairingEngine::pairing(&BLSG1::get_base(), &BLSG2::get_base());
        assert_eq!(base_gt, expected_base);
        assert_eq!(BLSGt::default(), BLSGt::get_identity());
    }

    #[test]
    fn bilinear_properties() {
        let identity_g1 = BLSG1::get_identity();
        let identity_g2 = BLSG2::get_identity();
        let identity_gt_computed = BLSPairingEngine::pairing(&identity_g1, &identity_g2);
        assert_eq!(BLSGt::get_identity(), identity_gt_computed);

        let mut prng = test_rng();

        let s1 = BLSScalar::from(50 + prng.next_u32() % 50);
        let s2 = BLSScalar::from(50 + prng.next_u32() % 50);

        let base_g1 = BLSG1::get_base();
        let base_g2 = BLSG2::get_base();

        let s1_base_g1 = base_g1.mul(&s1);
        let s2_base_g2 = base_g2.mul(&s2);

        let gt_mapped_element = BLSPairingEngine::pairing(&s1_base_g1, &s2_base_g2);
        let gt_base = BLSPairingEngine::pairing(&base_g1, &base_g2);

        assert_eq!(
            gt_mapped_element,
            BLSPairingEngine::pairing(&base_g1, &s2_base_g2).mul(&s1)
        );
        assert_eq!(
            gt_mapped_element,
            BLSPairingEngine::pairing(&s1_base_g1, &base_g2).mul(&s2)
        );
        assert_eq!(gt_mapped_element, gt_base.mul(&s1).mul(&s2));
        assert_eq!(gt_base.sub(&gt_base), BLSGt::get_identity());
        assert_eq!(gt_base.add(&gt_base.neg()), BLSGt::get_identity());
    }

    #[test]
    fn product_of_pairings_matches_sum() {
        let mut prng = test_rng();
        let a = [BLSG1::random(&mut prng), BLSG1::random(&mut prng)];
        let b = [BLSG2::random(&mut prng), BLSG2::random(&mut prng)];

        let expected = BLSPairingEngine::pairing(&a[0], &b[0])
            .add(&BLSPairingEngine::pairing(&a[1], &b[1]));
        assert_eq!(BLSPairingEngine::product_of_pairings(&a, &b), expected);

        // e(-P, Q) + e(P, Q) vanishes
        let cancel = BLSPairingEngine::product_of_pairings(&[a[0].neg(), a[0]], &[b[0], b[0]]);
        assert_eq!(cancel, BLSGt::get_identity());
    }

    #[test]
    fn g1_coordinates() {
        let mut prng = test_rng();
        let p = BLSG1::random(&mut prng);
        let q = BLSG1::from_xy(p.get_x(), p.get_y()).unwrap();
        assert_eq!(p, q);

        let identity = BLSG1::get_identity();
        assert!(identity.get_x().is_zero() && identity.get_y().is_zero());
        assert_eq!(
            BLSG1::from_xy(identity.get_x(), identity.get_y()).unwrap(),
            identity
        );

        let off_curve = BLSG1::from_xy(p.get_x(), BLSFq::from(7u64));
        assert_eq!(off_curve, Err(AlgebraError::DecompressElementError));

        let x = BLSFq::from_str(&p.get_x().to_string()).unwrap();
        assert_eq!(x, p.get_x());
        assert!(BLSFq::from_str(&BLSFq::get_field_size_biguint().to_string()).is_err());
    }

    #[test]
    fn g2_coordinates() {
        let mut prng = test_rng();
        let p = BLSG2::random(&mut prng);
        let q = BLSG2::from_xy(p.get_x(), p.get_y()).unwrap();
        assert_eq!(p, q);

        let identity = BLSG2::get_identity();
        assert_eq!(
            BLSG2::from_xy(identity.get_x(), identity.get_y()).unwrap(),
            identity
        );

        let (x0, x1) = p.get_x();
        let (_, y1) = p.get_y();
        let off_curve = BLSG2::from_xy((x0, x1), (BLSFq::from(3u64), y1));
        assert_eq!(off_curve, Err(AlgebraError::DecompressElementError));
    }
}
