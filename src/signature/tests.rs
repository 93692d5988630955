use super::{Signature, SignatureBuilder, SignatureError, SignatureErrorKind, Token, MAX_SIGNATURE};

use SignatureErrorKind::*;

macro_rules! test {
    ($input:expr, $expected:pat) => {{
        let actual = Signature::new($input).map_err(|e| e.kind);

        assert!(
            matches!(actual, $expected),
            "{actual:?} does not match {}",
            stringify!($expected)
        );
    }};
}

#[test]
fn validation() {
    test!(b"", Ok(..));
    test!(b"sss", Ok(..));
    test!(b"i", Ok(..));
    test!(b"b", Ok(..));
    test!(b"ai", Ok(..));
    test!(b"(i)", Ok(..));
    test!(b"a{sv}", Ok(..));
    test!(b"a{sa{ss}}", Ok(..));
    test!(b"(ta(st)a(st)s)", Ok(..));
    test!(b"w", Err(UnknownTypeCode(..)));
    test!(b"a", Err(MissingArrayElementType));
    test!(b"aaaaaa", Err(MissingArrayElementType));
    test!(b"ii(ii)a", Err(MissingArrayElementType));
    test!(b"ia", Err(MissingArrayElementType));
    test!(b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaai", Ok(..));
    test!(
        b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaai",
        Err(ExceededMaximumArrayRecursion)
    );
    test!(b")", Err(StructEndedButNotStarted));
    test!(b"}", Err(DictEndedButNotStarted));
    test!(b"i)", Err(StructEndedButNotStarted));
    test!(b"a)", Err(MissingArrayElementType));
    test!(b"(", Err(StructStartedButNotEnded));
    test!(b"(i", Err(StructStartedButNotEnded));
    test!(b"(ai", Err(StructStartedButNotEnded));
    test!(b"()", Err(StructHasNoFields));
    test!(b"(())", Err(StructHasNoFields));
    test!(b"a()", Err(StructHasNoFields));
    test!(b"i()", Err(StructHasNoFields));
    test!(b"()i", Err(StructHasNoFields));
    test!(b"(a)", Err(MissingArrayElementType));
    test!(b"a{ia}", Err(MissingArrayElementType));
    test!(b"a{}", Err(DictEntryHasNoFields));
    test!(b"a{aii}", Err(DictKeyMustBeBasicType));
    test!(b"a{(ii)i}", Err(DictKeyMustBeBasicType));
    test!(b"a{vi}", Err(DictKeyMustBeBasicType));
    test!(b"a{i}", Err(DictEntryHasOnlyOneField));
    test!(b"{is}", Err(DictEntryNotInsideArray));
    test!(b"i{is}", Err(DictEntryNotInsideArray));
    test!(b"a{isi}", Err(DictEntryHasTooManyFields));
    test!(b" ", Err(UnknownTypeCode(..)));
    test!(b"123", Err(UnknownTypeCode(..)));
    test!(&[b'i'; 255], Ok(..));
    test!(&[b'i'; MAX_SIGNATURE], Err(SignatureTooLong));
    test! {
        b"((((((((((((((((((((((((((((((((ii))))))))))))))))))))))))))))))))",
        Ok(..)
    };
    test! {
        b"(((((((((((((((((((((((((((((((((ii))))))))))))))))))))))))))))))))",
        Err(ExceededMaximumStructRecursion)
    };
}

#[test]
fn tokens() -> Result<(), SignatureError> {
    let signature = Signature::new(b"aaa(as)yua{yy}")?;

    let mut it = signature.iter();

    let Some(Token::Array(s2)) = it.next() else {
        panic!("expected outer array");
    };

    assert_eq!(s2, "aa(as)");

    let Some(Token::Array(s3)) = s2.iter().next() else {
        panic!("expected inner array");
    };

    assert_eq!(s3, "a(as)");

    let Some(Token::Array(s4)) = s3.iter().next() else {
        panic!("expected innermost array");
    };

    assert_eq!(s4, "(as)");

    let Some(Token::Struct(s5)) = s4.iter().next() else {
        panic!("expected struct");
    };

    assert_eq!(s5, "as");

    assert_eq!(it.next(), Some(Token::Basic(Signature::BYTE)));
    assert_eq!(it.next(), Some(Token::Basic(Signature::UINT32)));

    let Some(Token::Array(s6)) = it.next() else {
        panic!("expected dict array");
    };

    let Some(Token::Dict(key, value)) = s6.iter().next() else {
        panic!("expected dict entry");
    };

    assert_eq!(key, Signature::BYTE);
    assert_eq!(value, Signature::BYTE);
    assert_eq!(it.next(), None);
    Ok(())
}

#[test]
fn builder_composition() -> Result<(), SignatureError> {
    let mut builder = SignatureBuilder::new();
    builder.open_struct()?;
    builder.extend_from_signature(Signature::UINT64)?;
    builder.open_array()?;
    builder.open_struct()?;
    builder.extend_from_signature(Signature::STRING)?;
    builder.extend_from_signature(Signature::UINT64)?;
    builder.close_struct()?;
    builder.close_array();
    builder.extend_from_signature(Signature::STRING)?;
    builder.close_struct()?;

    assert_eq!(builder.finish()?, "(ta(st)s)");
    Ok(())
}

#[test]
fn builder_rejects_unbalanced() {
    let mut builder = SignatureBuilder::new();
    builder.open_struct().unwrap();
    assert!(builder.finish().is_err());
}

#[test]
fn alignment_of_leading_type() -> Result<(), SignatureError> {
    assert_eq!(Signature::new(b"y")?.alignment(), 1);
    assert_eq!(Signature::new(b"g")?.alignment(), 1);
    assert_eq!(Signature::new(b"v")?.alignment(), 1);
    assert_eq!(Signature::new(b"nq")?.alignment(), 2);
    assert_eq!(Signature::new(b"b")?.alignment(), 4);
    assert_eq!(Signature::new(b"s")?.alignment(), 4);
    assert_eq!(Signature::new(b"at")?.alignment(), 4);
    assert_eq!(Signature::new(b"t")?.alignment(), 8);
    assert_eq!(Signature::new(b"(y)")?.alignment(), 8);
    assert_eq!(Signature::EMPTY.alignment(), 1);
    Ok(())
}

#[test]
fn reparse_round_trip() -> Result<(), SignatureError> {
    let signature = Signature::new(b"(ta(st)a(st)s)")?;

    let mut it = signature.iter();

    let Some(Token::Struct(fields)) = it.next() else {
        panic!("expected struct");
    };

    assert_eq!(fields, "ta(st)a(st)s");
    assert_eq!(it.next(), None);

    let tokens = fields.iter().collect::<Vec<_>>();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0], Token::Basic(Signature::UINT64));
    assert_eq!(tokens[3], Token::Basic(Signature::STRING));
    Ok(())
}
