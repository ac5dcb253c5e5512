use crate::{
    error::{AppError, AppResult},
    models::RecommendationRequest,
    services::inference::OllamaClient,
};

/// Generates personalized movie recommendations with a local language model
///
/// The candidate movies and the user's stated preferences are embedded in a
/// fixed prompt asking for exactly three ranked picks. The model's answer is
/// returned as-is; its structure is never checked.
pub async fn get_recommendations(
    client: &OllamaClient,
    model: &str,
    request: &RecommendationRequest,
) -> String {
    let prompt = match build_prompt(request) {
        Ok(prompt) => prompt,
        Err(e) => return format!("Error: {}", e),
    };

    match client.generate(model, &prompt).await {
        Ok(Some(text)) => text,
        Ok(None) => "No recommendations available.".to_string(),
        Err(AppError::Status(status)) => format!(
            "Error: Failed to get recommendations. Status code: {}",
            status.as_u16()
        ),
        Err(e) => format!("Error: {}", e),
    }
}

/// Preference line as shown to the model
pub fn preference_line(request: &RecommendationRequest) -> String {
    format!(
        "Genre: {}, Preferences: {}",
        request.genre, request.preferences
    )
}

/// Renders the recommendation prompt
pub fn build_prompt(request: &RecommendationRequest) -> AppResult<String> {
    let movie_data = serde_json::to_string_pretty(&request.movies)?;

    Ok(format!(
        "You are a movie recommendation expert. Based on the user's preferences and the following movies, recommend the top 3 movies that best match their preferences.

User preferences: {preferences}

Available movies:
{movie_data}

For each recommended movie, explain why you think it's a good match for the user's preferences. Format your response as:

1. [Movie Title] - [Release Year]
   Rating: [Rating]/10
   Why it's a good match: [Your explanation]

2. [Movie Title] - [Release Year]
   Rating: [Rating]/10
   Why it's a good match: [Your explanation]

3. [Movie Title] - [Release Year]
   Rating: [Rating]/10
   Why it's a good match: [Your explanation]
",
        preferences = preference_line(request),
        movie_data = movie_data,
    ))
}
