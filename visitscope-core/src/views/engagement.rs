use crate::access_log::AggregateState;
use crate::views::UrlCount;

/// Hit counts for a fixed watch-list of URLs, in watch-list order.
pub fn core_feature_engagement<'a, S: AsRef<str>>(
    state: &AggregateState,
    features: &'a [S],
) -> Vec<UrlCount<'a>> {
    features
        .iter()
        .map(|feature| {
            let url = feature.as_ref();
            UrlCount {
                url,
                hits: state.hits_for(url),
            }
        })
        .collect()
}
