use super::*;

#[test]
fn test_command_names_round_trip() {
    for cmd in SidebarCommand::ALL {
        assert_eq!(SidebarCommand::from_name(cmd.name()), Some(cmd));
    }
    assert_eq!(SidebarCommand::from_name("side_bar_unknown"), None);
}

#[test]
fn test_command_descriptions() {
    assert_eq!(SidebarCommand::CopyName.description(), "Copy Filename");
    assert_eq!(SidebarCommand::CopyRelativePath.description(), "Copy Relative Path");
}

#[test]
fn test_is_mutating() {
    assert!(SidebarCommand::Move.is_mutating());
    assert!(SidebarCommand::Delete.is_mutating());
    assert!(!SidebarCommand::CopyName.is_mutating());
    assert!(!SidebarCommand::Compare.is_mutating());
}

#[test]
fn test_command_args_constructors() {
    let args = CommandArgs::paths(["/a", "/b"]);
    assert_eq!(args.paths, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    assert_eq!(args.group, None);

    let args = CommandArgs::tab(1, 2);
    assert!(args.paths.is_empty());
    assert_eq!((args.group, args.index), (Some(1), Some(2)));
}
