//! Performance benchmarks for treescribe

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use treescribe::test_utils::TestTree;
use treescribe::{MemoryReporter, NamePattern, RenameConfig, generate_content, rename_project};

const MARKDOWN_SOURCE: &str = r#"---
tags: [guide]
---

# Getting Started With Widgets

Widgets are configured through `widget.toml`.
"#;

const ELIXIR_SOURCE: &str = r#"defmodule OldNameWeb.Endpoint do
  use Phoenix.Endpoint, otp_app: :old_name

  @session_options [key: "_old_name_key"]

  def config, do: Application.get_env(:old_name, OLD_NAME_CONFIG)
end
"#;

fn create_tree(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file(&format!("section_{d}/page_{f}.md"), MARKDOWN_SOURCE);
        }
        tree.add_file(&format!("section_{d}/nested/notes.txt"), "plain text");
    }
    tree
}

fn create_project(modules: usize) -> TestTree {
    let tree = TestTree::new();
    for m in 0..modules {
        tree.add_file(&format!("lib/old_name/module_{m}.ex"), ELIXIR_SOURCE);
    }
    tree
}

fn bench_generate_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_content");
    for (dirs, files) in [(5, 10), (20, 25)] {
        let tree = create_tree(dirs, files);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{dirs}x{files}")),
            &tree,
            |b, tree| b.iter(|| generate_content(black_box(tree.path())).unwrap()),
        );
    }
    group.finish();
}

fn bench_name_pattern(c: &mut Criterion) {
    let pattern = NamePattern::new("old_name", "new_name").unwrap();
    let text = ELIXIR_SOURCE.repeat(200);
    c.bench_function("name_pattern_replace", |b| {
        b.iter(|| pattern.replace(black_box(&text)).changed())
    });
}

fn bench_rename_dry_run(c: &mut Criterion) {
    let tree = create_project(100);
    let config = RenameConfig {
        old_name: "old_name".to_string(),
        new_name: "new_name".to_string(),
        ignore: Vec::new(),
        dry_run: true,
    };
    c.bench_function("rename_project_dry_run_100", |b| {
        b.iter(|| {
            let mut reporter = MemoryReporter::new();
            rename_project(black_box(tree.path()), &config, &mut reporter).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_generate_content,
    bench_name_pattern,
    bench_rename_dry_run
);
criterion_main!(benches);
