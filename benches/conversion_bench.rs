use bedrock_chat_adapter::{convert_messages, ChatMessage};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn conversation(turns: usize) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system("You are a concise assistant.")];
    for i in 0..turns {
        messages.push(ChatMessage::user(format!("Question {} about the release notes", i)));
        messages.push(ChatMessage::assistant(format!("Answer {}", i)));
    }
    messages
}

fn bench_convert(c: &mut Criterion) {
    let short = conversation(2);
    let long = conversation(200);

    c.bench_function("convert_messages_short", |b| {
        b.iter(|| convert_messages(black_box(&short)))
    });
    c.bench_function("convert_messages_long", |b| {
        b.iter(|| convert_messages(black_box(&long)))
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
