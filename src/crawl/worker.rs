// src/crawl/worker.rs
// =============================================================================
// This module implements the worker: the loop that drives the crawl.
//
// A worker has exactly two states:
// - Running: pull a URL from the frontier, fetch it, scrape it, offer the
//   discovered links back, mark the URL complete, sleep the politeness
//   delay, repeat
// - Stopped: the frontier reported drained; the worker never touches the
//   frontier again
//
// Per-page errors stay per-page. A failed fetch is logged, the URL is
// marked complete, and the loop continues - one bad page never takes the
// worker down or corrupts the shared statistics.
//
// The final report is NOT written here: main waits for every worker to
// finish and flushes the snapshot once, so two workers reaching the
// drained frontier at the same time cannot double-write it.
//
// Rust concepts:
// - Generics with trait bounds: Worker<F: Fetch> accepts any downloader
// - Arc: All workers share the frontier, fetcher, stats, and config
// =============================================================================

use crate::config::CrawlConfig;
use crate::crawl::fetch::Fetch;
use crate::crawl::frontier::Frontier;
use crate::scrape::scrape;
use crate::stats::CorpusStats;
use std::sync::Arc;

// The worker's two states; Stopped is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkerState {
    Running,
    Stopped,
}

pub struct Worker<F: Fetch> {
    id: usize,
    frontier: Arc<Frontier>,
    fetcher: Arc<F>,
    stats: Arc<CorpusStats>,
    config: Arc<CrawlConfig>,
}

impl<F: Fetch> Worker<F> {
    pub fn new(
        id: usize,
        frontier: Arc<Frontier>,
        fetcher: Arc<F>,
        stats: Arc<CorpusStats>,
        config: Arc<CrawlConfig>,
    ) -> Self {
        Self {
            id,
            frontier,
            fetcher,
            stats,
            config,
        }
    }

    // Runs the worker until the frontier is drained
    pub async fn run(self) {
        let mut state = WorkerState::Running;
        while state == WorkerState::Running {
            let Some(url) = self.frontier.next_url().await else {
                log::info!("worker {}: frontier is empty, stopping", self.id);
                state = WorkerState::Stopped;
                continue;
            };

            match self.fetcher.fetch(&url).await {
                Ok(page) => {
                    log::info!(
                        "worker {}: downloaded {}, status <{}>",
                        self.id,
                        url,
                        page.status
                    );
                    let links = scrape(&url, &page, &self.stats, &self.config);
                    let mut queued = 0;
                    for link in &links {
                        if self.frontier.add(link) {
                            queued += 1;
                        }
                    }
                    log::debug!(
                        "worker {}: {} links found on {}, {} newly queued",
                        self.id,
                        links.len(),
                        url,
                        queued
                    );
                }
                Err(e) => {
                    // Fetch failures skip the page; the crawl continues
                    log::warn!("worker {}: failed to fetch {}: {}", self.id, url, e);
                }
            }

            self.frontier.mark_complete(&url);

            // Polite crawling: wait before hitting the next page
            tokio::time::sleep(self.config.politeness_delay()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::fetch::FetchResult;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;

    // A canned downloader: URL -> HTML body. Unknown URLs get a 404,
    // URLs listed in `failures` get a transport error.
    struct StubFetcher {
        pages: HashMap<String, String>,
        failures: Vec<String>,
    }

    #[async_trait]
    impl Fetch for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchResult> {
            if self.failures.iter().any(|failure| failure == url) {
                return Err(anyhow!("connection refused"));
            }
            match self.pages.get(url) {
                Some(body) => Ok(FetchResult {
                    status: 200,
                    final_url: url.to_string(),
                    content_type: Some("text/html; charset=utf-8".to_string()),
                    body: body.clone().into_bytes(),
                }),
                None => Ok(FetchResult {
                    status: 404,
                    final_url: url.to_string(),
                    content_type: Some("text/html".to_string()),
                    body: Vec::new(),
                }),
            }
        }
    }

    fn test_config() -> CrawlConfig {
        CrawlConfig {
            min_informative_tokens: 3,
            politeness_delay_ms: 0,
            ..CrawlConfig::default()
        }
    }

    const SEED: &str = "https://www.ics.uci.edu/";
    const PAGE_A: &str = "https://www.ics.uci.edu/a";
    const PAGE_B: &str = "https://www.ics.uci.edu/b";

    fn crawl_setup(fetcher: StubFetcher) -> (Arc<Frontier>, Arc<CorpusStats>, Arc<CrawlConfig>, Arc<StubFetcher>) {
        let config = Arc::new(test_config());
        let frontier = Arc::new(Frontier::new());
        let stats = Arc::new(CorpusStats::new(&config));
        (frontier, stats, config, Arc::new(fetcher))
    }

    #[tokio::test]
    async fn test_worker_crawls_to_exhaustion() {
        let mut pages = HashMap::new();
        pages.insert(
            SEED.to_string(),
            format!(
                r#"<html><body>the department home page
                   <a href="{}">a</a> <a href="{}">b</a></body></html>"#,
                PAGE_A, PAGE_B
            ),
        );
        pages.insert(
            PAGE_A.to_string(),
            // Links back to the seed: already seen, must not loop forever
            format!(
                r#"<html><body>page a content with words
                   <a href="{}">home</a></body></html>"#,
                SEED
            ),
        );
        // PAGE_B is not in the map, so it 404s

        let (frontier, stats, config, fetcher) = crawl_setup(StubFetcher {
            pages,
            failures: Vec::new(),
        });
        frontier.add(SEED);

        Worker::new(0, frontier.clone(), fetcher, stats.clone(), config).run().await;

        // The crawl terminated and the frontier agrees it is drained
        assert_eq!(frontier.next_url().await, None);

        let report = stats.snapshot();
        // Seed, A, and B were all discovered (B counted even though it 404'd,
        // because it was extracted as a link from an accepted page)
        assert_eq!(report.unique_count, 3);
        // Two pages produced statistics; the longest is the seed page
        let longest = report.longest_page.unwrap();
        assert_eq!(longest.url, SEED);
    }

    #[tokio::test]
    async fn test_fetch_failure_does_not_stop_the_worker() {
        let mut pages = HashMap::new();
        pages.insert(
            SEED.to_string(),
            format!(
                r#"<html><body>a page linking to a flaky host
                   <a href="{}">a</a> <a href="{}">b</a></body></html>"#,
                PAGE_A, PAGE_B
            ),
        );
        pages.insert(
            PAGE_B.to_string(),
            "<html><body>page b survived the crawl</body></html>".to_string(),
        );

        let (frontier, stats, config, fetcher) = crawl_setup(StubFetcher {
            pages,
            failures: vec![PAGE_A.to_string()],
        });
        frontier.add(SEED);

        Worker::new(0, frontier.clone(), fetcher, stats.clone(), config).run().await;

        // PAGE_A's transport error was isolated: PAGE_B was still crawled
        let report = stats.snapshot();
        assert!(report.unique_urls.contains(&PAGE_B.to_string()));
        assert_eq!(report.unique_count, 3);
    }

    #[tokio::test]
    async fn test_two_workers_share_one_frontier() {
        let mut pages = HashMap::new();
        let mut seed_body = String::from("<html><body>hub page with many links ");
        for i in 0..6 {
            let url = format!("https://www.ics.uci.edu/page{}", i);
            seed_body.push_str(&format!(r#"<a href="{}">x</a>"#, url));
            pages.insert(
                url,
                format!("<html><body>leaf page number {} here</body></html>", i),
            );
        }
        seed_body.push_str("</body></html>");
        pages.insert(SEED.to_string(), seed_body);

        let (frontier, stats, config, fetcher) = crawl_setup(StubFetcher {
            pages,
            failures: Vec::new(),
        });
        frontier.add(SEED);

        let workers = vec![
            Worker::new(0, frontier.clone(), fetcher.clone(), stats.clone(), config.clone()),
            Worker::new(1, frontier.clone(), fetcher.clone(), stats.clone(), config.clone()),
        ];
        futures::future::join_all(workers.into_iter().map(|w| w.run())).await;

        let report = stats.snapshot();
        // Seed plus six leaves, each counted exactly once across both workers
        assert_eq!(report.unique_count, 7);
    }
}
