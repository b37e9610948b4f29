//! Entry point that only explains where settings live.
//!
//! The settings dialog needs the running widget to preview against, so it
//! cannot be opened on its own.

fn main() {
    println!("本程序不支持直接运行，请启动 sunshine 后点击「设置」。");
    println!("Settings cannot be opened on their own. Start `sunshine` and click Settings.");
}
