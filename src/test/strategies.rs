use crate::{
    hash, hash_file,
    reader::{buffering::Buffering, mapping::Mapping},
    test::usecase::UseCase,
    Options, Outcome, Params, Reader, ReadingStrategy, E,
};
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

fn all_strategies(path: &Path) -> Result<Vec<Outcome>, E> {
    Ok(vec![
        Options::new().hash_file::<Buffering, _>(path)?,
        Options::new()
            .reading_strategy(ReadingStrategy::Complete)
            .hash_file::<Buffering, _>(path)?,
        Options::new().hash_file::<Mapping, _>(path)?,
        Options::new()
            .reading_strategy(ReadingStrategy::Complete)
            .hash_file::<Mapping, _>(path)?,
        Options::new()
            .reading_strategy(ReadingStrategy::MemoryMapped)
            .hash_file::<Mapping, _>(path)?,
    ])
}

#[test]
fn strategies_agree() -> Result<(), E> {
    let mut usecase = UseCase::new()?;
    for len in [0usize, 1, 7, 8, 9, 4095, 65_537] {
        let (path, content) = usecase.random(len)?;
        let expected = hash(Cursor::new(&content))?;
        for outcome in all_strategies(&path)? {
            assert_eq!(outcome, expected, "{len} bytes");
        }
    }
    usecase.clean()?;
    Ok(())
}

#[test]
fn empty_and_zero_files_are_base_state() -> Result<(), E> {
    let mut usecase = UseCase::new()?;
    for content in [vec![], vec![0u8; 8], vec![0u8; 8 * 1024]] {
        let path = usecase.file(&content)?;
        for outcome in all_strategies(&path)? {
            assert!(outcome.base_state);
            assert_eq!(outcome.digest.to_hex(), "b4bb4023dcbf444b");
        }
    }
    let path = usecase.file(&[0u8; 9])?;
    assert!(!hash_file(&path)?.base_state);
    usecase.clean()?;
    Ok(())
}

#[test]
fn file_larger_than_chunk() -> Result<(), E> {
    let mut usecase = UseCase::new()?;
    let (path, content) = usecase.random(100_003)?;
    let expected = hash(Cursor::new(&content))?;
    for size in [8usize, 4096, 100_000, 100_008] {
        let options = Options::new().params(Params::new().chunk_size(size)?);
        assert_eq!(options.hash_file::<Buffering, _>(&path)?, expected);
    }
    usecase.clean()?;
    Ok(())
}

#[test]
fn changed_file_changes_digest() -> Result<(), E> {
    let mut usecase = UseCase::new()?;
    let original = usecase.file(b"the quick brown fox jumps over the lazy dog")?;
    let truncated = usecase.file(b"the quick brown fox jumps over the lazy do")?;
    let changed = usecase.file(b"the quick brown fox jumps over the lazy cog")?;
    let digest = hash_file(&original)?.digest;
    assert_ne!(digest, hash_file(&truncated)?.digest);
    assert_ne!(digest, hash_file(&changed)?.digest);
    assert_eq!(digest, hash_file(&original)?.digest);
    usecase.clean()?;
    Ok(())
}

#[test]
fn missed_file() -> Result<(), E> {
    let usecase = UseCase::new()?;
    let path = usecase.root.join("missed");
    assert!(matches!(hash_file(&path), Err(E::NotFound(p)) if p == path));
    usecase.clean()?;
    Ok(())
}

#[test]
fn folder_is_rejected() -> Result<(), E> {
    let usecase = UseCase::new()?;
    let folder = usecase.folder()?;
    assert!(matches!(hash_file(&folder), Err(E::IsDirectory(_))));
    assert!(matches!(
        Options::new()
            .reading_strategy(ReadingStrategy::MemoryMapped)
            .hash_file::<Mapping, _>(&folder),
        Err(E::IsDirectory(_))
    ));
    usecase.clean()?;
    Ok(())
}

#[test]
fn buffering_reader_cannot_map() -> Result<(), E> {
    let mut usecase = UseCase::new()?;
    let path = usecase.file(b"content")?;
    assert!(matches!(
        Options::new()
            .reading_strategy(ReadingStrategy::MemoryMapped)
            .hash_file::<Buffering, _>(&path),
        Err(E::ReaderError(p, _)) if p == path
    ));
    usecase.clean()?;
    Ok(())
}

#[test]
fn sizeless_file_is_read_instead_of_mapped() -> Result<(), E> {
    // procfs reports a size of zero for files with content
    let path = PathBuf::from("/proc/self/cmdline");
    if !path.exists() {
        return Ok(());
    }
    let expected = hash_file(&path)?;
    assert!(!expected.base_state);
    for outcome in all_strategies(&path)? {
        assert_eq!(outcome, expected);
    }
    let mut reader = Mapping::bind(&path);
    assert!(!reader.mmap().map_err(Into::<E>::into)?.is_empty());
    Ok(())
}

#[test]
fn read_failure_keeps_path() {
    // reading from the start of the address space fails with EIO
    let path = PathBuf::from("/proc/self/mem");
    if !path.exists() {
        return;
    }
    assert!(matches!(hash_file(&path), Err(E::IOError(p, _)) if p == path));
    assert!(matches!(
        Options::new()
            .reading_strategy(ReadingStrategy::Complete)
            .hash_file::<Buffering, _>(&path),
        Err(E::IOError(p, _)) if p == path
    ));
    assert!(matches!(
        Options::new()
            .reading_strategy(ReadingStrategy::MemoryMapped)
            .hash_file::<Mapping, _>(&path),
        Err(E::ReaderError(p, _)) if p == path
    ));
}
