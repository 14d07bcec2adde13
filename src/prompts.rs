// Prompt templates sent to the model. Pure string building, no I/O.

pub fn build_factual_prompt(title: &str) -> String {
    format!(
        r#"You are a tool that transforms clickbait YouTube titles into more factual, straightforward titles.

Original title: "{title}"

Your task is to:
1. Remove exaggerated language, emotional manipulation, and excessive punctuation
2. Make the title accurate and descriptive of the actual content
3. Preserve the main topic but state it neutrally
4. Don't make it boring - keep it informative but engaging
5. Keep a similar length to the original title
6. Don't use quotes in the rewritten title

Reply with ONLY the rewritten factual title text without any quotes or explanations.
"#
    )
}

pub fn build_classification_prompt(title: &str) -> String {
    format!(
        r#"Classify this YouTube video title into EXACTLY ONE of these categories based on the likely content:

1. Education & How-To – Tutorials, explainers, study tips, DIY projects, coding lessons, science experiments.
2. Entertainment & Comedy – Skits, stand-up comedy, memes, parodies, reaction videos.
3. Vlogging & Lifestyle – Daily vlogs, travel diaries, minimalism, home organization, self-improvement.
4. Tech & Reviews – Unboxings, product reviews, comparisons, software tutorials, gadget breakdowns.
5. Gaming – Let's Plays, game reviews, walkthroughs, speedruns, game lore analysis.
6. Fitness & Health – Workouts, nutrition tips, mental health advice, yoga, biohacking.
7. Finance & Business – Investing tips, personal finance advice, side hustles, entrepreneurship insights.
8. News & Commentary – Political analysis, tech news, cultural commentary, investigative reporting.
9. Food & Cooking – Recipes, cooking techniques, food challenges, restaurant reviews.
10. Art & Creativity – Drawing tutorials, music production, filmmaking tips, crafts, photography.

YouTube title: "{title}"

Think through your reasoning. The title is the single most important signal for classification.

Reply with ONLY the category name from the provided list, exactly as written above. Do not include any explanations.
"#
    )
}
