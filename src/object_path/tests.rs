use crate::error::ErrorKind;
use crate::{read_dbus_binary, write_dbus_binary};

use super::{ObjectPath, ObjectPathBuf};

#[test]
fn legal_paths() {
    assert!(ObjectPath::new(b"").is_err());
    assert!(ObjectPath::new(b"a").is_err());
    assert!(ObjectPath::new(b"/").is_ok());
    assert!(ObjectPath::new(b"/a").is_ok());
    assert!(ObjectPath::new(b"//").is_err());
    assert!(ObjectPath::new(b"/se/tedro").is_ok());
    assert!(ObjectPath::new(b"/se/tedro/").is_err());
    assert!(ObjectPath::new(b"/org/freedesktop/DBus").is_ok());
    assert!(ObjectPath::new(b"/with_underscore").is_ok());
    assert!(ObjectPath::new(b"/with-dash").is_err());
    assert!(ObjectPath::new(b"/with space").is_err());
}

#[test]
fn wire_form() -> crate::Result<()> {
    let path = ObjectPathBuf::new("/a/b").expect("valid path");

    let mut buf = Vec::new();
    write_dbus_binary(&path, &mut buf)?;

    assert_eq!(buf, [4, 0, 0, 0, b'/', b'a', b'/', b'b', 0]);

    let back: ObjectPathBuf = read_dbus_binary(&buf)?;
    assert_eq!(back, path);
    Ok(())
}

#[test]
fn read_rejects_invalid_path() {
    let buf = [2, 0, 0, 0, b'/', b'/', 0];
    let error = read_dbus_binary::<ObjectPathBuf>(&buf).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::InvalidObjectPath);
    assert_eq!(error.offset(), 4);
}
