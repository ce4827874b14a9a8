//! Test utilities for the indexer

use std::fs;
use tempfile::TempDir;

/// Create a temporary tree from `(relative path, contents)` pairs.
pub fn write_files(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (path, contents) in files {
        let full = temp_dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, contents).unwrap();
    }
    temp_dir
}

/// A small Go module with local and third-party imports, tests and mocks.
pub fn create_test_project() -> TempDir {
    write_files(&[
        ("go.mod", "module github.com/org/repo\n\ngo 1.22\n"),
        (
            "main.go",
            r#"package main

import (
	"fmt"

	"github.com/org/repo/pkg/store"
)

func main() {
	fmt.Println(store.New())
}
"#,
        ),
        (
            "pkg/store/store.go",
            r#"package store

import (
	"sync"

	"github.com/org/repo/pkg/model"
	"github.com/org/repo/pkg/model"
)

type Store struct {
	mu    sync.Mutex
	items map[string]*model.Item
}

func New() *Store {
	return &Store{items: map[string]*model.Item{}}
}

func (s *Store) Put(key string, item *model.Item) {
	s.mu.Lock()
	defer s.mu.Unlock()
	s.items[key] = item
}
"#,
        ),
        (
            "pkg/model/item.go",
            r#"package model

type Item struct {
	Name string
}

func (i Item) Tags() []string { return nil }
"#,
        ),
        (
            "pkg/store/store_test.go",
            r#"package store

import "testing"

func TestNew(t *testing.T) {}
"#,
        ),
        (
            "pkg/store/store_mock.go",
            r#"package store

type MockStore struct{}

func (m *MockStore) Put(key string) {}
"#,
        ),
    ])
}
