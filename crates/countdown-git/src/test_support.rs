//! Throwaway repositories for tests

use std::cell::Cell;
use std::path::Path;

use git2::{Commit, Oid, Repository, Signature};
use tempfile::TempDir;

use crate::repository::GitRepo;

pub(crate) struct RepoFixture {
    temp: TempDir,
    repo: Repository,
    counter: Cell<usize>,
}

impl RepoFixture {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        Self {
            temp,
            repo,
            counter: Cell::new(0),
        }
    }

    pub(crate) fn repo(&self) -> GitRepo {
        GitRepo::open(self.temp.path()).unwrap()
    }

    /// Commit a new file on HEAD and return the commit id
    pub(crate) fn commit(&self, message: &str) -> Oid {
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        self.commit_with_parents(Some("HEAD"), message, &parents)
    }

    /// Commit on a side branch growing from `base`, leaving HEAD alone
    pub(crate) fn side_commit(&self, base: Oid, message: &str) -> Oid {
        let base = self.repo.find_commit(base).unwrap();
        self.commit_with_parents(None, message, &[&base])
    }

    /// Merge commit on HEAD whose second parent is `other`
    pub(crate) fn merge(&self, other: Oid, message: &str) -> Oid {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        let other = self.repo.find_commit(other).unwrap();
        self.commit_with_parents(Some("HEAD"), message, &[&head, &other])
    }

    fn commit_with_parents(
        &self,
        update_ref: Option<&str>,
        message: &str,
        parents: &[&Commit<'_>],
    ) -> Oid {
        let n = self.counter.get() + 1;
        self.counter.set(n);

        let file_name = format!("file-{}.txt", n);
        std::fs::write(self.temp.path().join(&file_name), message).unwrap();
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(&file_name)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();

        self.repo
            .commit(update_ref, &sig, &sig, message, &tree, parents)
            .unwrap()
    }

    pub(crate) fn tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub(crate) fn annotated_tag(&self, name: &str, target: Oid, message: &str) {
        let object = self.repo.find_object(target, None).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        self.repo.tag(name, &object, &sig, message, false).unwrap();
    }
}
