//! Basic Tokenizing
//!
//! Tokenize a mixed Thai/Latin document and print every word with its byte
//! range. Set `RUST_LOG=thaift=trace` to watch the session state machine.
//!
//! ```bash
//! RUST_LOG=thaift=debug cargo run --example basic_tokenizing
//! ```

use thaift::{InputSpan, ParseMode, SourceEncoding, Tokenizer, WordCollector};
use tracing_subscriber::EnvFilter;

fn main() -> thaift::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let document = "Rust เป็นภาษาโปรแกรม ที่ปลอดภัย\nสวัสดีชาวโลก hello world";
    let tokenizer = Tokenizer::default();

    let mut collector = WordCollector::new();
    let summary = tokenizer.parse(InputSpan::from(document), ParseMode::Indexing, &mut collector)?;

    println!("Document: {} bytes (UTF-8)", document.len());
    println!("Words: {}\n", summary.words);
    for word in collector.words() {
        println!(
            "[{:>2}] {:>3}..{:<3} {}",
            word.index,
            word.start,
            word.end,
            word.text().unwrap_or("<non-utf8>")
        );
    }

    // The same document in TIS-620: same words, single-byte offsets.
    let Some(legacy) = SourceEncoding::Tis620.encode(document) else {
        return Ok(());
    };
    let mut collector = WordCollector::new();
    tokenizer.parse(
        InputSpan::new(&legacy, SourceEncoding::Tis620),
        ParseMode::Indexing,
        &mut collector,
    )?;

    println!("\nDocument: {} bytes (TIS-620)", legacy.len());
    for word in collector.words() {
        println!("[{:>2}] {:>3}..{:<3}", word.index, word.start, word.end);
    }

    Ok(())
}
