//! Tag commands: add-tag, delete-tag.

use anyhow::Result;
use std::path::Path;

use crate::contacts::AddressBook;
use crate::person::Tag;

/// Add a tag to the person at a 1-based index.
pub fn add_tag(path: &Path, index: usize, tag: &str) -> Result<()> {
    let tag = Tag::new(tag)?;
    let mut book = AddressBook::load(path)?;
    book.add_tag(index, tag)?;
    book.save(path)?;

    for tagging in book.taggings() {
        println!("New tag to person added: {}", tagging);
    }
    Ok(())
}

/// Remove a tag from the person at a 1-based index.
pub fn delete_tag(path: &Path, index: usize, tag: &str) -> Result<()> {
    let tag = Tag::new(tag)?;
    let mut book = AddressBook::load(path)?;
    book.delete_tag(index, tag)?;
    book.save(path)?;

    for tagging in book.taggings() {
        println!("Deleted tag from person: {}", tagging);
    }
    Ok(())
}
