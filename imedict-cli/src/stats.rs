use imedict::Dictionary;

fn status_mark(enabled: bool) -> &'static str {
    if enabled { "✅" } else { "❌" }
}

pub fn print_categories(dictionary: &Dictionary, json_output: bool) {
    let summaries = dictionary.category_summaries();

    if json_output {
        match serde_json::to_string_pretty(&summaries) {
            Ok(body) => println!("{}", body),
            Err(e) => eprintln!("❌ エラー: {}", e),
        }
        return;
    }

    println!("📁 利用可能なカテゴリ:");
    for summary in &summaries {
        println!(
            "  {}. {} {} ({}件)",
            summary.index,
            status_mark(summary.enabled),
            summary.name,
            summary.word_count
        );
        if !summary.description.is_empty() {
            println!("     {}", summary.description);
        }
    }
    println!();
}

pub fn print_stats(dictionary: &Dictionary, json_output: bool) {
    let stats = dictionary.stats();

    if json_output {
        match serde_json::to_string_pretty(&stats) {
            Ok(body) => println!("{}", body),
            Err(e) => eprintln!("❌ エラー: {}", e),
        }
        return;
    }

    println!("📊 辞書統計情報");
    println!("  辞書名: {}", stats.name);
    println!("  更新日: {}", stats.updated);
    println!("  カテゴリ数: {}", stats.category_count);
    println!("  総単語数: {}", stats.total_words);
    println!("  有効単語数: {}", stats.active_words);
    println!();

    for category in &stats.categories {
        println!(
            "  {} {}: {}件 - {}",
            status_mark(category.enabled),
            category.name,
            category.word_count,
            category.description
        );
    }
}
